//! Prompt template for itinerary generation.

const TRAVEL_PLAN_TEMPLATE: &str = r#"
You are an expert travel consultant with extensive knowledge of global destinations.
Create a personalized travel plan for a trip to {destination} during {dates} with a budget of ${budget}.

Please provide a comprehensive and well-structured itinerary including:

# DESTINATION OVERVIEW
- Brief introduction to {destination}
- Current weather and seasonal considerations for {dates}
- Local customs, etiquette, and language tips
- Currency and payment information

# DAILY ITINERARY
Create a day-by-day plan covering the entire duration of the trip ({dates}), including:
- Morning activities
- Afternoon explorations
- Evening entertainment
- Recommended dining options for each day

# PRACTICAL INFORMATION
## Transportation
- Best ways to get around {destination}
- Public transit options and approximate costs
- Recommended transportation apps

## Accommodation
- Neighborhoods that best match the traveler's budget
- Estimated nightly rates
- Special amenities to look for

## Budget Breakdown
- Approximate daily costs for food, activities, and transportation
- Suggested allocation of the ${budget} budget
- Money-saving tips specific to {destination}

## Must-See Attractions
- Top 5 attractions with estimated visit duration and costs
- Lesser-known local gems
- Recommended booking methods to avoid lines

## Culinary Experiences
- Local specialties and where to find them
- Price ranges for different dining options
- Food markets and culinary tours worth exploring

Format the itinerary in a clear, organized manner with appropriate headings and bullet points.
Make specific recommendations rather than generic advice.
"#;

/// Render the itinerary prompt for one trip.
///
/// Whole-dollar budgets are printed without a fractional part.
pub fn travel_plan_prompt(destination: &str, dates: &str, budget: f64) -> String {
    let budget = if budget.fract() == 0.0 {
        format!("{:.0}", budget)
    } else {
        format!("{:.2}", budget)
    };
    TRAVEL_PLAN_TEMPLATE
        .replace("{destination}", destination)
        .replace("{dates}", dates)
        .replace("{budget}", &budget)
}
