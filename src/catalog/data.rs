//! Built-in catalog data.
//!
//! Amounts are authored in the reference currency (MXN). Labels and
//! descriptions are opaque, already-localized strings; the engine never
//! inspects them.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{Catalog, Currency, Feature, MultiplierOption, PaymentPlanSpec, PlanKind, ProjectType};

fn project_type(
    id: &str,
    base: i64,
    icon: &str,
    label: &str,
    description: &str,
    features: &[&str],
) -> ProjectType {
    ProjectType {
        id: id.to_string(),
        base: Decimal::from(base),
        label: label.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
    }
}

fn feature(id: &str, cost: i64, icon: &str, label: &str, description: &str) -> Feature {
    Feature {
        id: id.to_string(),
        cost: Decimal::from(cost),
        label: label.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
    }
}

fn option(id: &str, factor: Decimal, icon: &str, label: &str) -> MultiplierOption {
    MultiplierOption {
        id: id.to_string(),
        factor,
        label: label.to_string(),
        icon: icon.to_string(),
    }
}

fn currency(code: &str, symbol: &str, flag: &str, name: &str) -> Currency {
    Currency {
        code: code.to_string(),
        symbol: symbol.to_string(),
        flag: flag.to_string(),
        name: name.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn plan(
    id: &str,
    kind: PlanKind,
    icon: &str,
    label: &str,
    description: &str,
    badge: Option<&str>,
    note: Option<&str>,
    per_month: bool,
) -> PaymentPlanSpec {
    PaymentPlanSpec {
        id: id.to_string(),
        kind,
        label: label.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        badge: badge.map(str::to_string),
        note: note.map(str::to_string),
        per_month,
    }
}

impl Catalog {
    /// The full built-in catalog with the given exchange rate.
    pub fn builtin(exchange_rate: Decimal) -> Catalog {
        let features = [
            // ── Website ──────────────────────────────────────────────
            feature("responsiveDesign", 0, "monitor", "Responsive design", "Adapts to mobile, tablet and desktop"),
            feature("blog", 2500, "fileText", "Integrated blog", "Publish articles and news on your site"),
            feature("contactForm", 1000, "mail", "Contact form", "Receive messages directly from your site"),
            feature("seo", 2500, "search", "SEO optimized", "Better ranking on Google and search engines"),
            feature("multiLang", 4000, "globe", "Multi-language", "Content in Spanish, English or other languages"),
            feature("adminPanel", 6000, "settings", "Admin panel", "Manage content without coding knowledge"),
            feature("socialMedia", 1500, "share", "Social media integration", "Connect with Facebook, Instagram, X and more"),
            feature("animations", 2000, "sparkles", "Animations & visual effects", "Smooth transitions and micro-interactions"),
            feature("analytics", 1500, "barChart", "Google Analytics / metrics", "Track visits, conversions and behavior"),
            feature("liveChat", 2500, "messageCircle", "Live chat", "Assist your visitors in real time"),
            // ── E-commerce ───────────────────────────────────────────
            feature("productCatalog", 0, "grid", "Product catalog", "Organize and display products with filters"),
            feature("shoppingCart", 0, "shoppingCart", "Shopping cart", "Persistent cart with order summary"),
            feature("stripePayments", 3000, "creditCard", "Stripe payments", "International credit/debit cards"),
            feature("paypalPayments", 2500, "creditCard", "PayPal payments", "Secure payments via PayPal"),
            feature("shippingIntegration", 4000, "truck", "Shipping integration", "Envia.com, Uber Direct, automatic rates"),
            feature("cfdiEcommerce", 3500, "fileText", "Automatic CFDI invoicing", "Generate invoices at purchase time"),
            feature("inventorySync", 3000, "refreshCw", "Inventory sync", "Stock updated in real time"),
            feature("couponsDiscounts", 2000, "tag", "Coupons & discounts", "Promo codes and special offers"),
            feature("productReviews", 1500, "star", "Product reviews", "Customers rate and review products"),
            feature("wishlist", 1500, "heart", "Wishlist", "Save favorite products for later"),
            feature("orderTracking", 2500, "mapPin", "Order tracking", "Real-time shipment tracking"),
            feature("emailMarketing", 2500, "mail", "Automated email marketing", "Abandoned carts, newsletters, promos"),
            // ── Mobile App ───────────────────────────────────────────
            feature("crossPlatform", 0, "smartphone", "Cross-platform (iOS + Android)", "Flutter or React Native, single codebase"),
            feature("pushNotifications", 2500, "bell", "Push notifications", "Send alerts and reminders to device"),
            feature("offlineMode", 4000, "wifi", "Offline mode", "Works offline, syncs later"),
            feature("gpsLocation", 3000, "mapPin", "GPS / geolocation", "Maps, routes and real-time location"),
            feature("biometricAuth", 2500, "shield", "Biometric authentication", "Fingerprint, Face ID, facial recognition"),
            feature("cameraIntegration", 2000, "camera", "Camera integration", "Photos, document or QR scanning"),
            feature("appStorePublish", 4000, "upload", "App store publishing", "Google Play Store and Apple App Store"),
            feature("inAppPayments", 3500, "creditCard", "In-app payments", "Purchases and subscriptions within the app"),
            feature("deepLinking", 1500, "link", "Deep linking", "URLs that open specific app sections"),
            feature("socialLogin", 2000, "users", "Social login", "Sign in with Google, Apple, Facebook"),
            // ── Admin System ─────────────────────────────────────────
            feature("usersRoles", 4000, "shield", "User and role management", "Granular permissions by role and user"),
            feature("reports", 3500, "barChart", "Reports and dashboards", "Visualize key business metrics"),
            feature("exportExcelPdf", 2000, "download", "Export to Excel/PDF", "Download reports in standard formats"),
            feature("emailNotifications", 1500, "bell", "Email notifications", "Automatic email alerts"),
            feature("multiBranch", 5000, "building", "Multi-branch", "Manage multiple locations from one system"),
            feature("auditLog", 2500, "clipboard", "Audit / activity logs", "History of who did what and when"),
            feature("externalApi", 3000, "link", "API for external integrations", "Connect with other systems and services"),
            feature("docGeneration", 2500, "fileText", "Document generation", "Contracts, quotes and reports in PDF"),
            feature("workflows", 4000, "gitBranch", "Automated workflows", "Approvals, escalations and automatic tasks"),
            feature("payroll", 5000, "dollarSign", "Payroll", "Salary calculation, deductions and benefits"),
            // ── SaaS ─────────────────────────────────────────────────
            feature("multiTenant", 0, "layers", "Multi-tenant architecture", "Each client with isolated, secure data"),
            feature("subscriptions", 4000, "creditCard", "Subscriptions & plans", "Recurring billing with Stripe or PayPal"),
            feature("onboarding", 3000, "userPlus", "User onboarding", "Step-by-step guide for new users"),
            feature("publicApi", 3500, "code", "Public API", "Allow third parties to integrate with your platform"),
            feature("webhooks", 2500, "link", "Webhooks", "Real-time notifications to other systems"),
            feature("customDomains", 4000, "globe", "Custom domains", "Each client with their own domain"),
            feature("usageMetrics", 3000, "barChart", "Usage metrics", "Usage dashboard, limits and consumption"),
            feature("teamManagement", 2500, "users", "Team management", "Invite members, assign roles by team"),
            feature("rolePermissions", 2500, "lock", "Granular roles & permissions", "Fine-grained access control by feature"),
            feature("whiteLabeling", 5000, "palette", "White labeling", "Customize colors, logo and domain per client"),
            // ── Inventory ────────────────────────────────────────────
            feature("stockInOut", 0, "package", "Stock entries and exits", "Record merchandise movements"),
            feature("lowStockAlerts", 1500, "bell", "Low stock alerts", "Notifications when inventory is low"),
            feature("barcodeQr", 2500, "scan", "Barcode / QR codes", "Fast scanning for entries and exits"),
            feature("movementReports", 2000, "barChart", "Movement reports", "Detailed stock movement history"),
            feature("multiWarehouse", 4000, "building", "Multi-warehouse", "Manage inventory across multiple locations"),
            feature("posIntegration", 3000, "dollarSign", "POS integration", "Sync sales with your inventory"),
            feature("batchTracking", 2500, "layers", "Batch tracking / expiration", "Track batches, expiration dates and FIFO"),
            feature("purchaseOrders", 3000, "clipboard", "Purchase orders", "Generate and track supplier orders"),
            // ── POS ──────────────────────────────────────────────────
            feature("salesRegistry", 0, "dollarSign", "Sales registry", "Fast and easy-to-use point of sale"),
            feature("cashCut", 1500, "clipboard", "Cash cut", "Balance cash at day open and close"),
            feature("multiPayment", 2500, "creditCard", "Multiple payment methods", "Cash, card, transfer, vouchers"),
            feature("tickets", 1500, "fileText", "Tickets / receipts", "Custom ticket printing"),
            feature("discounts", 1000, "tag", "Discounts and promotions", "Apply discounts by product or sale"),
            feature("salesReports", 2000, "barChart", "Sales reports", "Daily, weekly and monthly metrics"),
            feature("loyaltyProgram", 3000, "award", "Loyalty program", "Points, rewards and frequent customers"),
            feature("vendorControl", 2500, "users", "Vendor control", "Commissions, goals and performance per vendor"),
            // ── Billing ──────────────────────────────────────────────
            feature("cfdiGeneration", 0, "fileText", "CFDI generation", "Electronic invoices valid before SAT"),
            feature("satCatalog", 2000, "database", "SAT product catalog", "SAT product and unit codes"),
            feature("recurringBilling", 3000, "refreshCw", "Recurring billing", "Generate periodic invoices automatically"),
            feature("clientPortal", 4000, "monitor", "Client download portal", "Your clients download their invoices online"),
            feature("taxReports", 2500, "barChart", "Tax reports", "Tax summary for accounting"),
            feature("accountingIntegration", 3500, "calculator", "Accounting integration", "Connect with accounting software"),
            feature("massBilling", 2500, "files", "Mass billing", "Generate hundreds of invoices at once"),
            feature("creditNotes", 2000, "fileText", "Credit notes", "Cancel or adjust issued invoices"),
            // ── Booking ──────────────────────────────────────────────
            feature("onlineBooking", 0, "calendarCheck", "Online bookings", "Your clients book from your website"),
            feature("calendarView", 2500, "calendar", "Calendar view", "View all appointments in a calendar"),
            feature("smsReminders", 2500, "messageCircle", "SMS reminders", "Send automatic reminders via SMS"),
            feature("employeeSchedule", 3000, "users", "Employee schedule", "Each employee with their own schedule"),
            feature("googleCalendarSync", 2000, "refreshCw", "Google Calendar sync", "Sync appointments with Google Calendar"),
            feature("waitlist", 1500, "clock", "Waitlist", "Manage waiting clients automatically"),
            feature("recurringBookings", 2500, "refreshCw", "Recurring bookings", "Weekly, biweekly or monthly appointments"),
            feature("depositPayments", 3000, "creditCard", "Deposit payments", "Collect deposits at booking time"),
            // ── API & Integrations ───────────────────────────────────
            feature("restApi", 0, "code", "REST API", "Secure and documented endpoints"),
            feature("stripeIntegration", 3000, "creditCard", "Stripe integration", "Payments, subscriptions and payouts with Stripe"),
            feature("twilioIntegration", 2500, "messageCircle", "Twilio integration", "SMS, WhatsApp and automated calls"),
            feature("paypalIntegration", 2500, "creditCard", "PayPal integration", "Payments and checkout with PayPal"),
            feature("satCfdiApi", 3500, "fileText", "SAT / CFDI API", "CFDI invoice stamping and validation"),
            feature("uberDirectApi", 3000, "truck", "Uber Direct", "Local deliveries via Uber Direct"),
            feature("enviacomApi", 2500, "truck", "Envia.com", "National shipping with multiple carriers"),
            feature("oauthSso", 3000, "lock", "OAuth / SSO", "Single Sign-On with Google, Microsoft, etc."),
            feature("graphqlApi", 2500, "code", "GraphQL API", "Flexible API with optimized queries"),
            feature("apiDocs", 1500, "fileText", "API documentation", "Interactive docs Swagger / OpenAPI style"),
            // ── Cloud / DevOps ───────────────────────────────────────
            feature("awsSetup", 0, "cloud", "AWS setup", "EC2, S3, RDS and Amazon services"),
            feature("dockerContainers", 2500, "box", "Docker / containers", "Reproducible and portable environments"),
            feature("ciCdPipeline", 3000, "gitBranch", "CI/CD pipeline", "Automatic deployment with each commit"),
            feature("terraformIac", 3500, "terminal", "Terraform / IaC", "Infrastructure as code, versioned"),
            feature("sslCerts", 1000, "shield", "SSL certificates", "Automatic HTTPS with Let's Encrypt"),
            feature("monitoringAlerts", 2500, "activity", "Monitoring & alerts", "Uptime, metrics and real-time alerts"),
            feature("autoScaling", 4000, "trending", "Auto-scaling", "Scale resources automatically with demand"),
            feature("lambdaFunctions", 3000, "zap", "Serverless functions", "AWS Lambda, no server management"),
            feature("backupStrategy", 2000, "hardDrive", "Backup strategy", "Automatic daily cloud backups"),
            feature("loadBalancing", 2500, "server", "Load balancing", "Distribute traffic across multiple servers"),
            // ── Tech Update ──────────────────────────────────────────
            feature("infraDiagnostic", 0, "search", "Infrastructure diagnostic", "Complete assessment of your current infrastructure"),
            feature("deviceSetup", 1500, "monitor", "Device setup", "Hardware installation and configuration"),
            feature("networkConfig", 2000, "wifi", "Network configuration", "WiFi, VPN, firewalls and network security"),
            feature("dataMigration", 2500, "database", "Data migration", "Transfer data from one system to another"),
            feature("staffTraining", 2000, "users", "Staff training", "Train your team on new tools"),
            feature("postSupport", 2500, "headphones", "Post-implementation support", "Technical assistance after delivery"),
            feature("cloudMigration", 4000, "cloud", "Cloud migration", "Move your systems to AWS, GCP or Azure"),
            feature("securityAudit", 3000, "shield", "Security audit", "Identify vulnerabilities and risks"),
            // ── AI Integration ───────────────────────────────────────
            feature("whatsappBot", 0, "messageCircle", "WhatsApp bot", "Serve customers 24/7 via WhatsApp"),
            feature("webChatbot", 4000, "bot", "Website chatbot", "Smart assistant on your website"),
            feature("processAutomation", 5000, "settings", "Process automation", "Automate repetitive tasks with AI"),
            feature("dataAnalysis", 6000, "barChart", "AI data analysis", "Extract insights and predictions from your data"),
            feature("smartReports", 4000, "barChart", "Smart reports", "AI-generated automatic reports"),
            feature("virtualAssistant", 7500, "bot", "Custom virtual assistant", "AI trained with your business data"),
            feature("voiceAssistant", 6000, "mic", "Voice assistant", "Voice interaction with conversational AI"),
            feature("docProcessing", 4000, "fileText", "Document processing", "Extract data from invoices, contracts, receipts"),
            // ── Consulting & Architecture ────────────────────────────
            feature("techAudit", 0, "search", "Technical audit", "Complete assessment of your current stack and code"),
            feature("archDesign", 3000, "layers", "Architecture design", "Diagrams and scalable architecture design"),
            feature("codeReview", 2500, "code", "Code review", "Deep review of quality, security and performance"),
            feature("roadmap", 2500, "map", "Technology roadmap", "Short and long-term technology evolution plan"),
            feature("stackSelection", 2000, "settings", "Stack selection", "Ideal technology recommendations for your project"),
            feature("perfOptimization", 3500, "zap", "Performance optimization", "Analysis and improvement of response times"),
            feature("scalabilityPlan", 3000, "trending", "Scalability plan", "Strategy to grow without rewriting your system"),
            feature("docAndDiagrams", 2000, "fileText", "Documentation & diagrams", "Technical docs, flow diagrams and ERDs"),
            // ── Team Training ────────────────────────────────────────
            feature("needsAssessment", 0, "clipboard", "Needs assessment", "Assessment of your team's level and needs"),
            feature("customCurriculum", 2000, "fileText", "Custom curriculum", "Study plan adapted to your stack and goals"),
            feature("liveWorkshops", 3000, "users", "Live workshops", "On-site or remote sessions with hands-on exercises"),
            feature("trainingMaterials", 1500, "book", "Training materials", "Guides, presentations and reference resources"),
            feature("practiceProjects", 2500, "code", "Practice projects", "Exercises applied to your company's real context"),
            feature("postTrainingSupport", 2000, "headphones", "Post-training support", "Follow-up and Q&A support after the course"),
            feature("certificationPath", 1500, "award", "Certification path", "Assessments and training certificates"),
            feature("recordedSessions", 2000, "video", "Recorded sessions", "Recordings of all sessions for future reference"),
            // ── Migration & Modernization ────────────────────────────
            feature("legacyAudit", 0, "search", "Legacy system audit", "Complete assessment of current system and dependencies"),
            feature("codeRefactor", 5000, "code", "Code refactoring", "Modernize the structure and quality of existing code"),
            feature("dbMigration", 4000, "database", "Database migration", "Migrate data between database engines or versions"),
            feature("cloudMigrationMod", 4000, "cloud", "Cloud migration", "Move your on-premise infrastructure to AWS, GCP or Azure"),
            feature("apiModernization", 3500, "link", "API modernization", "Update monolithic APIs to REST/GraphQL microservices"),
            feature("testingSetup", 3000, "checkCircle", "Testing setup", "Implement unit, integration and E2E tests"),
            feature("perfTuning", 3500, "zap", "Performance tuning", "Identify and eliminate bottlenecks"),
            feature("documentationMod", 2000, "fileText", "System documentation", "Technical documentation of the modernized system"),
        ];

        let project_types = vec![
            project_type(
                "website", 7500, "globe", "Website",
                "Your professional digital presence. Includes custom design, mobile optimization, SEO, blog and contact forms. Perfect for attracting clients online.",
                &["responsiveDesign", "blog", "contactForm", "seo", "multiLang", "adminPanel", "socialMedia", "animations", "analytics", "liveChat"],
            ),
            project_type(
                "ecommerce", 17500, "shoppingCart", "Online Store",
                "Sell products online with shopping cart, card payments, shipping integration, automatic invoicing and inventory management.",
                &["productCatalog", "shoppingCart", "stripePayments", "paypalPayments", "shippingIntegration", "cfdiEcommerce", "inventorySync", "couponsDiscounts", "productReviews", "wishlist", "orderTracking", "emailMarketing"],
            ),
            project_type(
                "mobileApp", 20000, "smartphone", "Mobile App",
                "Native app for iOS and Android with Flutter or React Native. Push notifications, offline mode, GPS, biometrics and app store publishing.",
                &["crossPlatform", "pushNotifications", "offlineMode", "gpsLocation", "biometricAuth", "cameraIntegration", "appStorePublish", "inAppPayments", "deepLinking", "socialLogin"],
            ),
            project_type(
                "adminSystem", 17500, "monitor", "Management System",
                "Custom system to manage your business: users, reports, data export, multi-branch, auditing and automated workflows.",
                &["usersRoles", "reports", "exportExcelPdf", "emailNotifications", "multiBranch", "auditLog", "externalApi", "docGeneration", "workflows", "payroll"],
            ),
            project_type(
                "saas", 25000, "cloud", "SaaS Platform",
                "Multi-tenant platform with subscriptions, public API, webhooks, usage metrics and white labeling. Ready to scale your digital business.",
                &["multiTenant", "subscriptions", "onboarding", "publicApi", "webhooks", "customDomains", "usageMetrics", "teamManagement", "rolePermissions", "whiteLabeling"],
            ),
            project_type(
                "inventory", 12500, "package", "Inventory Management",
                "Track entries, exits, low stock alerts, barcodes, multi-warehouse and purchase orders in real time.",
                &["stockInOut", "lowStockAlerts", "barcodeQr", "movementReports", "multiWarehouse", "posIntegration", "batchTracking", "purchaseOrders"],
            ),
            project_type(
                "pos", 15000, "dollarSign", "Point of Sale",
                "Point of sale with sales registry, cash cuts, multiple payment methods, tickets, discounts and sales reports.",
                &["salesRegistry", "cashCut", "multiPayment", "tickets", "discounts", "salesReports", "loyaltyProgram", "vendorControl"],
            ),
            project_type(
                "billing", 14000, "fileText", "Automated Billing",
                "Generate CFDI invoices, recurring billing, client portal, tax reports and accounting integration. Fully SAT compliant.",
                &["cfdiGeneration", "satCatalog", "recurringBilling", "clientPortal", "taxReports", "accountingIntegration", "massBilling", "creditNotes"],
            ),
            project_type(
                "booking", 15000, "calendarCheck", "Bookings / Appointments",
                "Online booking system with calendar view, SMS reminders, employee schedules and Google Calendar sync.",
                &["onlineBooking", "calendarView", "smsReminders", "employeeSchedule", "googleCalendarSync", "waitlist", "recurringBookings", "depositPayments"],
            ),
            project_type(
                "apiIntegration", 10000, "link", "API & Integrations",
                "Connect your systems with REST/GraphQL APIs, Stripe, Twilio, PayPal, SAT, Uber Direct, Envia.com and OAuth/SSO.",
                &["restApi", "stripeIntegration", "twilioIntegration", "paypalIntegration", "satCfdiApi", "uberDirectApi", "enviacomApi", "oauthSso", "graphqlApi", "apiDocs"],
            ),
            project_type(
                "cloudDevOps", 12500, "server", "Cloud Infrastructure / DevOps",
                "Cloud infrastructure with AWS, Docker, CI/CD, Terraform, SSL, monitoring, auto-scaling and automatic backups.",
                &["awsSetup", "dockerContainers", "ciCdPipeline", "terraformIac", "sslCerts", "monitoringAlerts", "autoScaling", "lambdaFunctions", "backupStrategy", "loadBalancing"],
            ),
            project_type(
                "techUpdate", 6000, "refreshCw", "Tech Modernization",
                "Modernize your infrastructure: diagnostics, device setup, data migration, staff training and ongoing technical support.",
                &["infraDiagnostic", "deviceSetup", "networkConfig", "dataMigration", "staffTraining", "postSupport", "cloudMigration", "securityAudit"],
            ),
            project_type(
                "aiIntegration", 10000, "bot", "AI Integration",
                "Integrate artificial intelligence: WhatsApp and web chatbots, process automation, data analysis, virtual assistants and document processing.",
                &["whatsappBot", "webChatbot", "processAutomation", "dataAnalysis", "smartReports", "virtualAssistant", "voiceAssistant", "docProcessing"],
            ),
            project_type(
                "consulting", 10000, "compass", "Consulting & Architecture",
                "Technical analysis, architecture design, code review and technology roadmap for your project.",
                &["techAudit", "archDesign", "codeReview", "roadmap", "stackSelection", "perfOptimization", "scalabilityPlan", "docAndDiagrams"],
            ),
            project_type(
                "teamTraining", 8000, "graduationCap", "Team Training",
                "Train your team on new technologies, tools and processes. On-site or remote courses, adapted to your stack.",
                &["needsAssessment", "customCurriculum", "liveWorkshops", "trainingMaterials", "practiceProjects", "postTrainingSupport", "certificationPath", "recordedSessions"],
            ),
            project_type(
                "migration", 15000, "arrowUpRight", "Software Migration & Modernization",
                "Bring your legacy system to modern technologies: code refactoring, cloud migration and performance optimization.",
                &["legacyAudit", "codeRefactor", "dbMigration", "cloudMigrationMod", "apiModernization", "testingSetup", "perfTuning", "documentationMod"],
            ),
        ];

        let business_sizes = vec![
            option("1-5", dec!(1.0), "user", "1-5 employees"),
            option("6-20", dec!(1.15), "users", "6-20 employees"),
            option("21-50", dec!(1.3), "building", "21-50 employees"),
            option("50+", dec!(1.5), "city", "50+ employees"),
        ];

        let current_states = vec![
            option("fromScratch", dec!(1.0), "plus", "Start from scratch"),
            option("improve", dec!(0.7), "refresh", "Improve what I have"),
            option("migrate", dec!(1.2), "shuffle", "Migrate from another system"),
        ];

        let timelines = vec![
            option("asap", dec!(1.3), "zap", "ASAP"),
            option("1-3months", dec!(1.0), "calendar", "1-3 months"),
            option("3-6months", dec!(0.95), "calendarRange", "3-6 months"),
            option("exploring", dec!(1.0), "search", "Just exploring"),
        ];

        let currencies = vec![
            currency("MXN", "$", "\u{1F1F2}\u{1F1FD}", "Mexican Pesos"),
            currency("USD", "$", "\u{1F1FA}\u{1F1F8}", "US Dollars"),
        ];

        let payment_plans = vec![
            plan(
                "fullPayment", PlanKind::FullPayment, "dollarSign",
                "Full payment", "Pay the full amount upfront and get a 10% discount.",
                Some("Save 10%"), Some("One-time payment"), false,
            ),
            plan(
                "splitPayment", PlanKind::SplitPayment, "creditCard",
                "50% / 50%", "50% when the project starts and 50% on delivery.",
                None, Some("2 payments"), false,
            ),
            plan(
                "msi3", PlanKind::ThreeInstallments, "calendar",
                "3 installments", "Split the cost into 3 monthly interest-free payments.",
                Some("Popular"), Some("\u{d7} 3 months"), false,
            ),
            plan(
                "msi6", PlanKind::SixInstallments, "calendar",
                "6 installments", "Split the cost into 6 monthly interest-free payments.",
                None, Some("\u{d7} 6 months"), false,
            ),
            plan(
                "financing12", PlanKind::TwelveMonthFinancing, "clock",
                "12 months", "Monthly payments over 12 months with a 15% financing surcharge.",
                None, Some("\u{d7} 12 months (+15%)"), false,
            ),
            plan(
                "saasMonthly", PlanKind::MonthlySubscription, "cloud",
                "Monthly SaaS", "Monthly payment that includes development + maintenance and updates.",
                None, Some("\u{d7} 12 months (includes maintenance)"), true,
            ),
            plan(
                "annualLicense", PlanKind::AnnualLicense, "server",
                "Annual license", "60% of the cost as initial license, plus a monthly fee for server and support.",
                None, None, false,
            ),
            plan(
                "timeRetainer", PlanKind::HourlyRetainer, "clock",
                "Hourly retainer", "Estimated development hours billed at the standard hourly rate.",
                None, None, false,
            ),
            plan(
                "payroll", PlanKind::PayrollStyle, "users",
                "Payroll-style", "Pay as a monthly salary over 6 months of dedicated development.",
                None, Some("\u{d7} 6 months"), true,
            ),
        ];

        let hourly_rates = BTreeMap::from([
            ("MXN".to_string(), dec!(500)),
            ("USD".to_string(), dec!(30)),
        ]);
        let hosting_fees = BTreeMap::from([
            ("MXN".to_string(), dec!(3000)),
            ("USD".to_string(), dec!(170)),
        ]);

        Catalog {
            project_types,
            features: features
                .into_iter()
                .map(|f| (f.id.clone(), f))
                .collect(),
            business_sizes,
            current_states,
            timelines,
            currencies,
            payment_plans,
            reference_currency: "MXN".to_string(),
            exchange_rate,
            source_code_surcharge: dec!(0.25),
            hourly_rates,
            hosting_fees,
        }
    }
}
