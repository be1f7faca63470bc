// Stage-1 classification prompts. The user prompt enumerates the exact
// output schema — field names, enum values, numeric ranges — because the
// model returns unstructured text that we then parse as a JSON array.

/// Classifier persona and priorities.
pub const CLASSIFY_SYSTEM: &str = "You are an assistant helping a marketer \
    (Google Ads, Merchant Center/Shopping, SEO, GA4/GTM, CRM, email, B2B) pick \
    projects on the Freelancehunt marketplace. For each project, judge how well \
    it fits technical marketing / advertising / analytics work. IMPORTANT: tasks \
    involving Google Merchant Center / Google Shopping / Performance Max / product \
    feeds have one of the HIGHEST priorities. Do not exclude managerial roles \
    (Lead Generation Manager, Marketing Manager and similar), but rank them \
    slightly below purely technical advertising/analytics tasks.";

/// Schema and ranking rules. The list of project lines is appended after
/// this template.
pub const CLASSIFY_USER_HEADER: &str = r#"Analyze the following projects. For EACH one return a JSON object with fields:
 id (string, the same id),
 fit (true/false),
 score (integer 1..10),
 category (one of: "core_paid", "core_noprice", "site_full", "managerial", "low_priority_cards", "other"),
 domainCategory (one of: "ads", "analytics", "crm_email", "seo", "dev_site", "management", "content_low", "other"),
 workload (one of: "tiny", "small", "medium", "large"),
 reason (short explanation in the language of the listing).

Field notes:
- domainCategory="ads" — advertising tasks (Google Ads, PMax, Shopping, Meta/TikTok Ads and other paid traffic).
- domainCategory="analytics" — GA4, GTM, events, DataLayer, reporting, server-side, BigQuery/Looker Studio.
- domainCategory="crm_email" — email campaigns, CRM, automated funnels, lead management.
- domainCategory="seo" — SEO for the site/content.
- domainCategory="dev_site" — site development/fixes, markup, technical edits with no advertising focus.
- domainCategory="management" — managerial/leadgen roles where the core is running a process/team.
- domainCategory="content_low" — product-card filling, routine content with no strategy.
- domainCategory="other" — anything that fits none of the above.

workload describes the task size:
- "tiny" — under 2 hours (a consultation, a small fix).
- "small" — roughly 2-8 hours.
- "medium" — roughly 8-20 hours.
- "large" — over 20 hours.

Ranking rules:
1) score 9-10, category "core_*" — core tasks: Google Ads, Merchant Center/Shopping, Performance Max/PMax, GA4/GTM, e-commerce SEO, CRM/funnels, email marketing, B2B digital.
   Especially boost Merchant Center / Shopping / PMax.
2) category "managerial" — roles like Lead Generation Manager, Marketing Manager. They are fit=true but score slightly lower.
3) category "site_full" — building/optimizing whole sites for SEO/speed.
4) category "low_priority_cards" — filling/editing product cards.
5) Anything unrelated to marketing/analytics — fit=false, score 1-4, category "other".

Output a CLEAN JSON array with no commentary, for example:
[{"id":"123","fit":true,"score":9,"category":"core_paid","domainCategory":"ads","workload":"small","reason":"..."}, ...]

"#;
