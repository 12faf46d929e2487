//! Built-in content used when no content document is supplied.

use chrono::NaiveDate;

use crate::catalog::{FaqEntry, Feature, GardenImage, Product, ProductCategory};
use crate::habits::{Frequency, Habit};

fn product(id: &str, name: &str, price: f64, photo: u32, category: ProductCategory) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        price,
        image: format!(
            "https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg?auto=compress&cs=tinysrgb&w=300"
        ),
        category,
    }
}

pub fn sample_products() -> Vec<Product> {
    use ProductCategory::{Plant, Tool};
    vec![
        product("1", "Watering Can", 29.99, 4505166, Tool),
        product("2", "Garden Gloves", 15.99, 4505137, Tool),
        product("3", "Basil Plant", 8.99, 4750274, Plant),
        product("4", "Tomato Seeds", 4.99, 4750314, Plant),
        product("5", "Plant Fertilizer", 19.99, 4750345, Tool),
        product("6", "Succulent Collection", 24.99, 4750378, Plant),
    ]
}

fn image(id: &str, title: &str, category: &str, photo_path: &str, description: &str, tags: &[&str]) -> GardenImage {
    GardenImage {
        id: id.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        url: format!("https://images.pexels.com/photos/{photo_path}?auto=compress&cs=tinysrgb&w=800"),
        description: description.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

pub fn sample_images() -> Vec<GardenImage> {
    vec![
        image(
            "1",
            "Beautiful Rose Garden",
            "flowers",
            "56866/garden-rose-red-pink-56866.jpeg",
            "A stunning rose garden in full bloom with various colorful roses",
            &["roses", "flowers", "garden", "colorful", "bloom"],
        ),
        image(
            "2",
            "Vegetable Garden Layout",
            "vegetables",
            "4750274/pexels-photo-4750274.jpeg",
            "Well-organized vegetable garden with raised beds and healthy plants",
            &["vegetables", "raised-beds", "organized", "healthy", "organic"],
        ),
        image(
            "3",
            "Herb Garden Collection",
            "herbs",
            "1301856/pexels-photo-1301856.jpeg",
            "Fresh herb garden with basil, rosemary, and other culinary herbs",
            &["herbs", "basil", "rosemary", "culinary", "fresh"],
        ),
        image(
            "4",
            "Japanese Garden Style",
            "design",
            "1427541/pexels-photo-1427541.jpeg",
            "Peaceful Japanese-inspired garden with stones and minimalist design",
            &["japanese", "zen", "stones", "peaceful", "minimalist"],
        ),
        image(
            "5",
            "Succulent Garden",
            "succulents",
            "1212693/pexels-photo-1212693.jpeg",
            "Beautiful arrangement of various succulents in decorative pots",
            &["succulents", "arrangements", "pots", "decorative", "low-maintenance"],
        ),
        image(
            "6",
            "Butterfly Garden",
            "flowers",
            "1429659/pexels-photo-1429659.jpeg",
            "Colorful flower garden designed to attract butterflies and pollinators",
            &["butterflies", "pollinators", "colorful", "native", "wildlife"],
        ),
        image(
            "7",
            "Urban Rooftop Garden",
            "design",
            "4750378/pexels-photo-4750378.jpeg",
            "Modern rooftop garden in urban setting with container plants",
            &["urban", "rooftop", "containers", "modern", "space-saving"],
        ),
        image(
            "8",
            "Cottage Garden Style",
            "design",
            "1366630/pexels-photo-1366630.jpeg",
            "Charming cottage-style garden with mixed flowers and natural pathways",
            &["cottage", "mixed-flowers", "pathways", "charming", "natural"],
        ),
        image(
            "9",
            "Tomato Growing Tips",
            "vegetables",
            "4750314/pexels-photo-4750314.jpeg",
            "Healthy tomato plants growing in garden with proper support",
            &["tomatoes", "support", "growing", "healthy", "garden"],
        ),
        image(
            "10",
            "Lavender Field",
            "herbs",
            "4750345/pexels-photo-4750345.jpeg",
            "Peaceful lavender field in bloom with purple flowers",
            &["lavender", "purple", "field", "fragrant", "calming"],
        ),
        image(
            "11",
            "Greenhouse Interior",
            "design",
            "4750166/pexels-photo-4750166.jpeg",
            "Well-organized greenhouse interior with various plants and tools",
            &["greenhouse", "interior", "organized", "tools", "plants"],
        ),
        image(
            "12",
            "Cactus Collection",
            "succulents",
            "4750137/pexels-photo-4750137.jpeg",
            "Diverse collection of cacti and desert plants in terracotta pots",
            &["cacti", "desert", "terracotta", "collection", "drought-resistant"],
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn habit(
    id: &str,
    title: &str,
    description: &str,
    frequency: Frequency,
    category: &str,
    streak: u32,
    completed: bool,
    last_completed: (i32, u32, u32),
    icon: &str,
) -> Habit {
    let (y, m, d) = last_completed;
    Habit {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        frequency,
        category: category.to_string(),
        streak,
        completed,
        last_completed: NaiveDate::from_ymd_opt(y, m, d),
        icon: icon.to_string(),
    }
}

pub fn sample_habits() -> Vec<Habit> {
    use Frequency::{Daily, Monthly, Weekly};
    vec![
        habit(
            "1",
            "Water Indoor Plants",
            "Check soil moisture and water indoor plants as needed",
            Daily,
            "Watering",
            15,
            false,
            (2025, 1, 16),
            "💧",
        ),
        habit(
            "2",
            "Check Outdoor Garden",
            "Inspect outdoor plants for pests and diseases",
            Daily,
            "Maintenance",
            8,
            true,
            (2025, 1, 17),
            "🌱",
        ),
        habit(
            "3",
            "Fertilize Vegetables",
            "Apply organic fertilizer to vegetable garden",
            Weekly,
            "Fertilizing",
            4,
            false,
            (2025, 1, 14),
            "🥕",
        ),
        habit(
            "4",
            "Prune Dead Branches",
            "Remove dead or diseased branches from trees and shrubs",
            Weekly,
            "Pruning",
            12,
            false,
            (2025, 1, 15),
            "✂️",
        ),
        habit(
            "5",
            "Compost Management",
            "Turn compost pile and add kitchen scraps",
            Weekly,
            "Composting",
            22,
            true,
            (2025, 1, 17),
            "🍂",
        ),
        habit(
            "6",
            "Seed Starting",
            "Check on seedlings and rotate seed trays",
            Daily,
            "Planting",
            3,
            false,
            (2025, 1, 16),
            "🌿",
        ),
        habit(
            "7",
            "Harvest Herbs",
            "Harvest fresh herbs for cooking and preserve extras",
            Weekly,
            "Harvesting",
            6,
            false,
            (2025, 1, 14),
            "🌿",
        ),
        habit(
            "8",
            "Garden Planning",
            "Review and plan next season's garden layout",
            Monthly,
            "Planning",
            2,
            true,
            (2025, 1, 1),
            "📋",
        ),
    ]
}

fn faq(id: &str, question: &str, answer: &str) -> FaqEntry {
    FaqEntry {
        id: id.to_string(),
        question: question.to_string(),
        answer: answer.to_string(),
    }
}

pub fn sample_faq() -> Vec<FaqEntry> {
    vec![
        faq(
            "1",
            "How do I start tracking my gardening habits?",
            "Simply create an account, navigate to the Habits page, and begin adding your gardening routines. You can track watering schedules, fertilizing, pruning, and more. Set up daily, weekly, or monthly reminders to build consistent habits.",
        ),
        faq(
            "2",
            "What types of gardening habits can I track?",
            "You can track any gardening-related activity including watering plants, checking soil moisture, fertilizing, pruning, pest inspection, seed planting, composting, and garden maintenance. The app is flexible to accommodate your unique gardening routine.",
        ),
        faq(
            "3",
            "How does the streak system work?",
            "Every time you complete a habit, your streak increases by one day. Maintaining streaks helps build consistency and motivation. If you miss a day, your streak resets, encouraging you to maintain regular gardening practices.",
        ),
        faq(
            "4",
            "Can I customize my habit categories?",
            "Yes! You can organize your habits into custom categories like 'Watering', 'Fertilizing', 'Pest Control', 'Harvesting', and more. This helps you stay organized and track different aspects of your gardening routine.",
        ),
        faq(
            "5",
            "Is there a mobile version available?",
            "The web app is fully responsive and works great on mobile devices. You can access all features from your phone or tablet, making it easy to track habits while you're actually working in your garden.",
        ),
    ]
}

fn feature(icon: &str, title: &str, description: &str) -> Feature {
    Feature {
        icon: icon.to_string(),
        title: title.to_string(),
        description: description.to_string(),
    }
}

pub fn sample_features() -> Vec<Feature> {
    vec![
        feature(
            "🎯",
            "Goal Setting",
            "Set specific gardening goals and track your progress with detailed analytics and insights.",
        ),
        feature(
            "📅",
            "Habit Scheduling",
            "Create custom schedules for watering, fertilizing, and other garden maintenance tasks.",
        ),
        feature(
            "📈",
            "Progress Tracking",
            "Monitor your consistency and celebrate milestones as you build lasting gardening habits.",
        ),
        feature(
            "🍃",
            "Plant Care Tips",
            "Access expert advice and seasonal reminders to keep your garden healthy year-round.",
        ),
    ]
}
