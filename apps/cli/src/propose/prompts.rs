// Stage-2 drafting prompts. Rate bounds are injected per run, so the
// system prompt is a builder rather than a constant.

use crate::llm_client::prompts::JSON_ARRAY_ONLY;

/// Builds the drafter persona. Estimates are for the Ukrainian market
/// only — EU/US pricing is derived locally by a fixed multiplier.
pub fn draft_system(base_hourly_rate_uah: f64, min_hourly_rate_uah: f64) -> String {
    format!(
        "You help a marketer (Google Ads, Merchant Center / Shopping, Performance Max, \
        GA4/GTM, e-commerce SEO, CRM, email marketing, B2B) prepare bids for projects. \
        For each project, write a draft proposal and give a realistic hour and cost \
        estimate FOR THE UKRAINIAN MARKET. EU/US pricing is computed separately by \
        multiplication, so work only with Ukrainian rates here. Proposals must be \
        professional and to the point, focused on outcomes and technical expertise. \
        No fluff, no pompous openings. Assume a comfortable base rate of about \
        {base_hourly_rate_uah} UAH/hour and a minimum reasonable rate of about \
        {min_hourly_rate_uah} UAH/hour. {JSON_ARRAY_ONLY}"
    )
}

/// Builds the schema header for the user prompt. The list of project
/// lines is appended after it.
pub fn draft_user_header(base_hourly_rate_uah: f64, min_hourly_rate_uah: f64) -> String {
    let rate_cap = (base_hourly_rate_uah * 1.1).round();
    format!(
        r#"Prepare DRAFT PROPOSALS for these projects.
For each project produce an object with fields:
- id (string, the same id),
- proposal (the bid text for the project),
- estimate (an object with the task estimate for the Ukrainian market).

Estimate structure:
- hours_min: minimum hours (integer, may be 1 for a consultation),
- hours_max: maximum hours (integer, >= hours_min),
- hourly_rate_uah: approximate hourly rate in UAH (integer, within [{min_hourly_rate_uah}; {rate_cap}]),
- total_min_uah: approximate minimum cost (hours_min * rate),
- total_max_uah: approximate maximum cost (hours_max * rate),
- phases: array of work phases, each an object {{ "name": "short name", "hours": number }}.

Hour guidance:
- tiny: 1-2 hours (a consultation, a small fix).
- small: roughly 2-8 hours.
- medium: roughly 8-20 hours.
- large: over 20 hours.
Refine the range from the workload and the project description, but do not compress it artificially when there is a lot to do.

Proposal requirements:
- 1-3 short paragraphs.
- Show that you understand the niche and the client's pain.
- Explain why the marketer is a fit (Google Ads, GA4/GTM, Merchant Center / Shopping, PMax, e-commerce SEO, CRM, email, B2B — whichever applies).
- Add a short plan of 3-5 steps (audit → setup → launch → optimization → reporting).
- Do not put a specific hourly rate in the text; a total cost range is fine where it makes sense.
- Write in the language of the original project description (ukr/ru/en accordingly).

RESPONSE format — a CLEAN JSON array, for example:
[{{"id":"123","proposal":"...text...","estimate":{{"hours_min":5,"hours_max":8,"hourly_rate_uah":800,"total_min_uah":4000,"total_max_uah":6400,"phases":[{{"name":"Analysis and strategy","hours":2}},{{"name":"Setup","hours":3}}]}}}}]

Here is the project list:

"#
    )
}
