/// Built-in location list used when the operator does not supply one.
///
/// Intentionally kept as-is, including the repeated entries ("Mumbai",
/// "Manila"); each occurrence is fetched and recorded separately.
pub const DEFAULT_LOCATIONS: &[&str] = &[
    "New York", "London", "Tokyo", "Sydney", "Paris", "Berlin", "Moscow", "Beijing",
    "Rio de Janeiro", "Cairo", "Mumbai", "Dubai", "Singapore", "Toronto", "Mexico City",
    "Istanbul", "Rome", "Amsterdam", "Madrid", "Barcelona", "Seoul", "Bangkok",
    "Kuala Lumpur", "Jakarta", "Manila", "Ho Chi Minh City", "Shanghai", "Hong Kong",
    "Delhi", "Mumbai", "Bangalore", "Chennai", "Kolkata", "Karachi", "Lahore", "Tehran",
    "Baghdad", "Riyadh", "Tel Aviv", "Athens", "Vienna", "Prague", "Warsaw", "Stockholm",
    "Oslo", "Copenhagen", "Helsinki", "Dublin", "Lisbon", "Brussels", "Zurich", "Geneva",
    "Milan", "Naples", "Munich", "Frankfurt", "Hamburg", "Vancouver", "Montreal",
    "Chicago", "Los Angeles", "San Francisco", "Miami", "Houston", "Boston", "Seattle",
    "Atlanta", "Dallas", "Las Vegas", "Phoenix", "Denver", "Portland", "San Diego",
    "Austin", "Philadelphia", "Washington DC", "Melbourne", "Brisbane", "Perth",
    "Auckland", "Wellington", "Johannesburg", "Cape Town", "Nairobi", "Lagos",
    "Casablanca", "Addis Ababa", "Buenos Aires", "Santiago", "Lima", "Bogota",
    "Sao Paulo", "Caracas", "Panama City", "San Jose", "Havana", "Kingston", "Nassau",
    "San Juan", "Manila", "Hanoi", "Phnom Penh", "Vientiane", "Yangon", "Dhaka",
    "Colombo", "Kathmandu", "Thimphu", "Ulaanbaatar", "Taipei", "Osaka", "Kyoto",
    "Busan",
];

/// Owned copy of the default list, in declaration order.
pub fn default_locations() -> Vec<String> {
    DEFAULT_LOCATIONS.iter().map(|s| s.to_string()).collect()
}

/// Parse a comma-separated operator override. Entries are trimmed, empty
/// entries dropped. Blank input yields an empty list so the caller can fall
/// back to the defaults.
pub fn parse_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
