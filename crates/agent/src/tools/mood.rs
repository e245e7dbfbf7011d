//! Weather-to-mood text generator
//!
//! Maps a weather condition to an emotion and a templated sentence about the
//! traveler's day. Randomness is confined to the template and closing-line
//! picks.

use async_trait::async_trait;
use rand::seq::SliceRandom;
use serde_json::{json, Value};

use super::ToolTrait;

const DEFAULT_CITY: &str = "Taoyuan";
const DEFAULT_LANDMARK: &str = "National Central University";

/// English alias -> canonical condition key.
const CONDITION_ALIASES: &[(&str, &str)] = &[
    ("few clouds", "partly cloudy"),
    ("scattered clouds", "partly cloudy"),
    ("broken clouds", "cloudy"),
    ("clouds", "cloudy"),
    ("mist", "fog"),
    ("haze", "fog"),
    ("smoke", "fog"),
    ("drizzle", "rain"),
    ("light rain", "rain"),
    ("moderate rain", "rain"),
    ("heavy rain", "rain"),
    ("overcast", "overcast clouds"),
];

const EMOTIONS: &[(&str, &str)] = &[
    ("clear", "cheerful and full of energy"),
    ("partly cloudy", "lazy and calm"),
    ("cloudy", "quiet and thoughtful"),
    ("rain", "a little melancholy, but romantic"),
    ("thunderstorm", "restless and tense"),
    ("snow", "romantic and full of surprises"),
    ("fog", "mysterious and dreamlike"),
    ("overcast clouds", "sluggish and spaced out"),
];

const TEMPLATES: &[(&str, &[&str])] = &[
    (
        "clear",
        &[
            "It's a bright day in {city} and I feel lit up inside. Let's head to {destination}!",
            "The sun is shining over {city}, my mood is glowing with it. {destination}, here I come!",
        ],
    ),
    (
        "rain",
        &[
            "Raindrops are drumming on umbrellas in {city} like a slow song. A hot cocoa near {destination} sounds perfect.",
            "Rainy {city} makes everything softer. {destination} must look a little more poetic today.",
        ],
    ),
    (
        "cloudy",
        &["The grey sky over {city} makes me want to wander {destination} and just daydream."],
    ),
    (
        "thunderstorm",
        &["The thunder over {city} has me on edge. I just want to hide in a quiet corner of {destination}."],
    ),
    (
        "snow",
        &["It's snowing in {city}! The whole world turned gentle, and {destination} must look magical."],
    ),
    (
        "fog",
        &["{city} is wrapped in fog and {destination} looks like a fairyland. I can't resist exploring."],
    ),
    (
        "partly cloudy",
        &["The half-clouded sky over {city} feels lazy and calm. {destination} is perfect for a slow walk."],
    ),
    (
        "overcast clouds",
        &["The thick clouds over {city} make me drowsy. Might as well grab a coffee near {destination}."],
    ),
];

const FALLBACK_TEMPLATE: &str =
    "The weather in {city} is hard to describe, but {destination} always lifts the spirit.";
const FALLBACK_EMOTION: &str = "calm, with a hint of anticipation";

const MOOD_TAILS: &[&str] = &[
    "Hope your day goes just as smoothly.",
    "Weather like this feels like the start of a story.",
    "Want to go soak up the atmosphere together?",
    "Weather shapes the mood, but the mood can change the weather too.",
];

#[derive(Default)]
pub struct MoodTool;

impl MoodTool {
    pub fn new() -> Self {
        Self
    }
}

fn canonical_key(weather_status: &str) -> String {
    let key = weather_status.trim().to_lowercase();
    for (alias, canonical) in CONDITION_ALIASES {
        if key == *alias {
            return canonical.to_string();
        }
    }
    key
}

fn compose(
    weather_status: &str,
    city: &str,
    landmark: Option<&str>,
    temperature: Option<f64>,
) -> String {
    let city_name = {
        let trimmed = city.trim();
        if trimmed.is_empty() {
            "this place"
        } else {
            trimmed
        }
    };
    let destination = match landmark.map(str::trim).filter(|l| !l.is_empty()) {
        Some(landmark) => landmark.to_string(),
        None if city_name == DEFAULT_CITY => DEFAULT_LANDMARK.to_string(),
        None => city_name.to_string(),
    };

    let normalized = canonical_key(weather_status);
    // The API's description can be wordier than the canonical key
    // ("light intensity drizzle rain"), so match by containment.
    let matched = TEMPLATES
        .iter()
        .find(|(key, _)| normalized.contains(key))
        .map(|(key, templates)| (*key, *templates));

    let mut rng = rand::thread_rng();
    let template = match matched {
        Some((_, templates)) => templates.choose(&mut rng).copied().unwrap_or(FALLBACK_TEMPLATE),
        None => FALLBACK_TEMPLATE,
    };
    let emotion = matched
        .and_then(|(key, _)| {
            EMOTIONS
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, emotion)| *emotion)
        })
        .unwrap_or(FALLBACK_EMOTION);
    let tail = MOOD_TAILS.choose(&mut rng).copied().unwrap_or(MOOD_TAILS[0]);

    let temperature_text = match temperature {
        Some(t) => format!(", with a temperature of {:.1} degrees Celsius", t),
        None => String::new(),
    };

    let sentence = template
        .replace("{city}", city_name)
        .replace("{destination}", &destination);

    format!(
        "The weather in {} right now is {}{}.\nToday's vibe feels \"{}\". {} {}",
        city_name, weather_status, temperature_text, emotion, sentence, tail
    )
}

#[async_trait]
impl ToolTrait for MoodTool {
    fn name(&self) -> &str {
        "get_mood"
    }

    fn description(&self) -> &str {
        "Turn a weather condition into a mood-flavored reply about a city and \
         a landmark worth visiting."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "weather_status": {
                    "type": "string",
                    "description": "Weather condition, e.g. 'clear' or 'light rain'"
                },
                "city": {
                    "type": "string",
                    "description": "City name (defaults to Taoyuan)"
                },
                "landmark": {
                    "type": "string",
                    "description": "Optional landmark to mention"
                },
                "temperature": {
                    "type": "number",
                    "description": "Optional temperature in degrees Celsius"
                }
            },
            "required": ["weather_status"]
        })
    }

    async fn execute(
        &self,
        args: Value,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let weather_status = args["weather_status"].as_str().unwrap_or("");
        let city = args["city"].as_str().unwrap_or(DEFAULT_CITY);
        let landmark = args["landmark"].as_str();
        let temperature = args["temperature"].as_f64();

        if weather_status.trim().is_empty() {
            let place = landmark.map(str::trim).filter(|l| !l.is_empty());
            return Ok(format!(
                "The weather report for {} seems to have gotten lost, but {} is still worth a visit.",
                city,
                place.unwrap_or("this place")
            ));
        }

        Ok(compose(weather_status, city, landmark, temperature))
    }
}
