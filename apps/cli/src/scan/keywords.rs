//! Keyword tables and signal patterns for the prefilter and the priority
//! tuner. All lists are lowercase; matching is substring-based against the
//! lowercased title + description (plus the verdict rationale for tuning).
//! Ukrainian, Russian and English variants are carried side by side because
//! listings arrive in all three.

use std::sync::LazyLock;

use regex::Regex;

/// A listing must contain at least one of these to reach the classifier
/// (unless it is a pure catalog-fill listing, see `CATALOG_FILL`).
pub const HIGH_PRIORITY_KEYWORDS: &[&str] = &[
    // General performance / digital marketing
    "digital маркетинг",
    "діджитал маркетинг",
    "digital marketing",
    "performance marketing",
    "performance-маркетинг",
    "інтернет-маркетинг",
    "интернет маркетинг",
    "online marketing",
    "маркетингова стратегія",
    "маркетинговая стратегия",
    "контекстна реклама",
    "контекстная реклама",
    "онлайн реклама",
    "реклама в інтернеті",
    "реклама в интернете",
    "налаштувати рекламу",
    "настроить рекламу",
    "настройка рекламы",
    "запуск реклами",
    "запуск рекламы",
    "рекламні кампанії",
    "рекламные кампании",
    "ppc",
    "sem",
    // Google Ads / Shopping / PMax
    "google ads",
    "google adwords",
    "google реклама",
    "гугл реклама",
    "реклама в google",
    "search ads",
    "google search",
    "google shopping",
    "shopping ads",
    "merchant center",
    "google merchant center",
    "performance max",
    "pmax",
    "smart shopping",
    "динамічний ремаркетинг",
    "динамический ремаркетинг",
    "dynamic remarketing",
    "ремаркетинг",
    "ретаргетинг",
    "product feed",
    "product feeds",
    // Analytics / tracking / GA4 / GTM
    "ga4",
    "google analytics 4",
    "google analytics",
    "universal analytics",
    "gtm",
    "google tag manager",
    "tag manager",
    "data layer",
    "datalayer",
    "web-аналітика",
    "веб аналітика",
    "веб аналитика",
    "web analytics",
    "аналітика сайту",
    "аналитика сайта",
    "events tracking",
    "conversion tracking",
    "конверсії",
    "конверсии",
    "налаштування подій",
    "настройка событий",
    "server-side tracking",
    "server side tracking",
    "server-side tagging",
    "offline conversions",
    "offline-конверсії",
    "utm-мітки",
    "utm метки",
    "utm разметка",
    "bigquery",
    "looker studio",
    "datastudio",
    "data studio",
    // E-commerce platforms
    "інтернет-магазин",
    "интернет магазин",
    "online store",
    "ecommerce",
    "e-commerce",
    "shopify",
    "магазин shopify",
    "woocommerce",
    "woo commerce",
    "opencart",
    "open cart",
    "magento",
    "prestashop",
    "presta shop",
    "cs-cart",
    "bigcommerce",
    "prom.ua",
    // Email / CRM / funnels
    "email-маркетинг",
    "email маркетинг",
    "email marketing",
    "email рассылка",
    "e-mail рассылка",
    "email розсилка",
    "розсилка",
    "розсилки",
    "рассылки",
    "newsletter",
    "klaviyo",
    "mailchimp",
    "sendpulse",
    "omnisend",
    "smtp",
    "crm",
    "amo crm",
    "amocrm",
    "bitrix24",
    "hubspot",
    "pipedrive",
    "salesforce",
    "автоворонка",
    "воронка продаж",
    "воронка продажів",
    "sales funnel",
    "lead nurturing",
    // B2B / leadgen
    "b2b",
    "b2b marketing",
    "b2b leadgen",
    "b2b lead gen",
    "лідогенерація",
    "лидогенерация",
    "lead generation",
    "b2b sales",
    "appointment setting",
    // Social ads (secondary profile)
    "facebook ads",
    "meta ads",
    "instagram ads",
    "tiktok ads",
    "linkedin ads",
    "реклама в facebook",
    "реклама в instagram",
    "реклама в tiktok",
    "реклама в linkedin",
    "реклама в соцмережах",
    "реклама в соцсетях",
    "таргетована реклама",
    "таргетированная реклама",
    "paid social",
    "ads manager",
    "рекламний кабінет",
    "рекламный кабинет",
];

/// Low-value listing keywords. A match drops the listing unless a rescue
/// term is also present.
pub const LOW_PRIORITY_EXCLUDE_KEYWORDS: &[&str] = &[
    "копірайт",
    "копирайт",
    "стаття",
    "статей",
    "article",
    "логотип",
    "logo",
    "банер",
    "баннера",
    "баннер",
    "web-дизайн",
    "web design",
    "веб-дизайн",
    "відео монтаж",
    "монтаж відео",
    "озвучка",
    "voice over",
    "переклад",
    "translation",
    "перекладач",
    "відеоролик",
];

/// Terms that rescue a listing from the exclusion gate.
pub static RESCUE_TERMS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)google|ads|seo|ga4|crm|shopping|merchant").expect("valid regex"));

/// Product catalog-fill terminology. Such listings are kept at low
/// priority rather than dropped, so the classifier makes the final call.
pub static CATALOG_FILL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)карток товарів|картки товарів|карточек товаров|наполнен").expect("valid regex")
});

/// Ads/analytics/CRM context that disqualifies a listing from counting as
/// *pure* catalog-fill.
pub static CATALOG_CONTEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)google|ads|merchant|shopping|seo|ga4|gtm|crm|email").expect("valid regex")
});

/// Merchant Center / Shopping / PMax / feed signal — boosts the score.
pub static MERCHANT_SIGNAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)merchant center|google shopping|shopping|performance max|pmax|фід|фида|фиду|feed")
        .expect("valid regex")
});

/// Manager-role signal. Matched against the title only — incidental
/// mentions of managers in the description must not demote a listing.
pub static MANAGERIAL_SIGNAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)manager|менеджер|lead generation manager|marketing manager")
        .expect("valid regex")
});

/// "Build a store/site from scratch" signal.
pub static SITE_BUILD_SIGNAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(создание|створення|розробка).*(сайта|сайту|интернет-магазина|інтернет-магазину|landing)|internet shop|internet store",
    )
    .expect("valid regex")
});
