//! Embedded fallback prompts
//!
//! These are compiled into the binary and used when no override file is
//! found. All templates are Handlebars; context fields are documented on the
//! context structs in the agent modules.

/// System prompt for the destination intelligence agent
pub const DESTINATION_SYSTEM: &str = "You are a destination intelligence expert with comprehensive, current \
     knowledge of global travel destinations. All information must be \
     factually grounded and all costs converted to INR.";

/// User prompt for the destination intelligence agent
pub const DESTINATION_PROMPT: &str = r#"Analyze the following destination for an upcoming trip.

Destination: {{destination}}
Duration: {{duration_days}} days
Budget: INR {{budget}}
Travel Dates: {{travel_dates}}
Travelers: {{people_count}} people

Requirements:
1. Include destination-specific transportation, not just generic categories (tuk-tuks, ferries, gondolas where they exist).
2. Cover the accommodation categories actually available at this destination with realistic nightly prices for the travel dates.
3. Provide a local cost breakdown: daily meal tiers, free activities, and the paid activity cost band.
4. Score safety realistically (0-100) for the destination overall, each transport mode, and each accommodation category.
5. Note cultural customs, etiquette, and festivals during the travel period.

Provide destination intelligence that downstream planners can rely on without further research."#;

/// System prompt for the activity discovery agent
pub const ACTIVITY_SYSTEM: &str = "You are a local activity discovery expert. You surface authentic local \
     experiences, not tourist traps, with realistic INR costs and safety scores.";

/// User prompt for the activity discovery agent
pub const ACTIVITY_PROMPT: &str = r#"Discover activities for these travelers.

Destination: {{destination}}
Duration: {{duration_days}} days
Group Size: {{people_count}} people
Budget: INR {{budget}}
Preferences: {{#each preferences}}{{this}}, {{/each}}
Travel Dates: {{travel_dates}}

Destination context:
- Season: {{climate.season}}, {{climate.temperature}}, rainfall: {{climate.rainfall}}
- Festivals during the stay: {{#each festivals}}{{this}}, {{/each}}
- Free activities already known: {{#each free_activities}}{{this}}, {{/each}}
- Paid activity cost band: INR {{activity_cost_min}} to {{activity_cost_max}}

Requirements:
1. Organize activities by category (Cultural, Adventure, Food, Nature, Nightlife, ...).
2. Give every activity a unique id, realistic cost (0 for free), duration, location, difficulty, a safety score 0-100, whether booking is required, and one review excerpt.
3. Mark a sensible default selection covering the trip without overpacking days.
4. Propose a theme per day (1 through {{duration_days}}) with recommended activity ids.
5. Include lesser-known local experiences alongside the must-sees.

Cover all budget ranges and respect the season."#;

/// System prompt for the accommodation search agent
pub const ACCOMMODATION_SYSTEM: &str = "You are an accommodation specialist with comprehensive knowledge of \
     properties worldwide. You only propose real, bookable properties with \
     genuine platform links and realistic INR pricing.";

/// User prompt for the accommodation search agent
pub const ACCOMMODATION_PROMPT: &str = r#"Find lodging for this trip.

Destination: {{destination}}
Duration: {{duration_days}} nights
Guests: {{people_count}} people
Budget: INR {{budget}}
Travel Dates: {{travel_dates}}
Preferences: {{#each preferences}}{{this}}, {{/each}}

Known accommodation categories at this destination ({{currency.local}}, rate {{currency.exchange_rate}} to INR):
{{#each accommodation}}
- {{category}}: about INR {{average_cost_per_night}}/night, areas: {{#each popular_areas}}{{this}}, {{/each}}
{{/each}}

Requirements:
1. Return 3 to 8 options spanning price categories, each with a unique id, nightly INR cost, booking link, amenities, a safety score 0-100, and one review excerpt.
2. Prefer properties near the areas listed above; include local property types where relevant (homestays, heritage stays).
3. Recommend the best areas to stay and practical booking tips for this destination."#;

/// System prompt for the cost estimation agent
pub const COST_SYSTEM: &str = "You are a travel cost estimation expert with current pricing data. Your \
     estimates are realistic, itemized, and all in INR.";

/// User prompt for the cost estimation agent
pub const COST_PROMPT: &str = r#"Estimate full trip costs.

Destination: {{destination}}
Origin: India
Duration: {{duration_days}} days
Travelers: {{people_count}} people
Travel Dates: {{travel_dates}}
Budget Range: INR {{budget}}

Destination cost context:
- Local currency: {{currency.local}}, exchange rate {{currency.exchange_rate}} to INR
- Daily meals: budget INR {{meals.budget}}, mid-range INR {{meals.mid_range}}, luxury INR {{meals.luxury}}

Accommodation options found:
{{#each accommodation_options}}
- {{category}}: INR {{cost_per_night}}/night
{{/each}}

Activities found:
{{#each activities}}
- {{name}} ({{category}}): INR {{cost}}
{{/each}}

Requirements:
1. Estimate total trip cost at budget, mid-range, and luxury tiers.
2. Estimate round-trip flights from India for the travel dates.
3. Give a per-day food cost for each tier consistent with the meal data above.
4. List potential hidden costs (visa, insurance, tips, transfers, SIM) with INR estimates.
5. Suggest concrete cost-saving strategies."#;

/// System prompt for the itinerary synthesis call
pub const SYNTHESIS_SYSTEM: &str = "You are a master travel planner synthesizing the findings of specialized \
     research agents into complete, bookable itineraries. Output must be \
     internally consistent with the research you are given.";

/// User prompt for the itinerary synthesis call
pub const SYNTHESIS_PROMPT: &str = r#"Create the final itineraries for this request.

USER REQUEST:
- Destination: {{request.destination}}
- Duration: {{request.duration_days}} days
- Budget: INR {{request.budget}}
- Travelers: {{request.people_count}} people
- Trip type: {{request.trip_type}}
- Preferences: {{#each request.preferences}}{{this}}, {{/each}}
- Travel Dates: {{request.travel_dates}}

RESEARCH (JSON, from the specialist agents):
Destination intelligence:
{{destination_json}}

Activity catalog:
{{activities_json}}

Accommodation shortlist:
{{accommodation_json}}

Cost model:
{{costs_json}}

SYNTHESIS REQUIREMENTS:
1. Produce exactly 3 itineraries with distinct vibes:
   - one focused on cultural immersion and authentic local experiences
   - one balancing adventure with relaxation
   - one emphasizing unique experiences and hidden gems
2. Every itinerary covers days 1 through {{request.duration_days}} exactly once, each day with a title, a theme, and its activities drawn from the catalog above (keep ids, costs, and safety scores consistent with the research).
3. Give each itinerary 3 to 6 hotel options and 3 to 6 commute options consistent with the accommodation shortlist and the destination's transport modes.
4. Set each itinerary's flight and per-day food baselines from the cost model; leave accommodation, activities, commute, and total at 0 (they are computed from user selections later).
5. Mark a sensible default activity selection per day.
6. Fill the destination overview and budget guidance from the research."#;

/// System prompt for the formal trip enhancement agent
pub const FORMAL_SYSTEM: &str = "You are an expert planner for formal business trips. You adjust leisure \
     plans around fixed professional engagements.";

/// User prompt for the formal trip enhancement agent
pub const FORMAL_PROMPT: &str = r#"Adjust this trip plan around the traveler's meeting.

Trip:
- Destination: {{destination}}
- Duration: {{duration_days}} days
- Budget: INR {{budget}}
- Travelers: {{people_count}} people
- Travel Dates: {{travel_dates}}

Meeting:
- Location: {{meeting.location}}
- Duration: {{meeting.duration}}
- Mode: {{meeting.offline_online}}
- Facilities required: {{#each meeting.facilities_required}}{{this}}, {{/each}}

Adjust the plan:
- Stay: recommend lodging close to the meeting location with the required facilities.
- Transport: the best mode given the meeting schedule and location.
- Schedule: a day plan that protects preparation and travel time around the meeting.
- Buffer times: explicit buffers so delays cannot make the traveler late."#;

/// Get an embedded template by name
pub fn get_embedded(name: &str) -> Option<&'static str> {
    match name {
        "destination-intelligence" => Some(DESTINATION_PROMPT),
        "activity-discovery" => Some(ACTIVITY_PROMPT),
        "accommodation-search" => Some(ACCOMMODATION_PROMPT),
        "cost-estimation" => Some(COST_PROMPT),
        "itinerary-synthesis" => Some(SYNTHESIS_PROMPT),
        "formal-enhancement" => Some(FORMAL_PROMPT),
        _ => None,
    }
}

/// Names of all embedded templates
pub fn template_names() -> &'static [&'static str] {
    &[
        "destination-intelligence",
        "activity-discovery",
        "accommodation-search",
        "cost-estimation",
        "itinerary-synthesis",
        "formal-enhancement",
    ]
}
