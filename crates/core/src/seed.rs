//! Sample menu catalog used to seed an empty menu API.

use crate::menu::NewMenuItem;
use crate::types::Price;

fn entry(
    name: &str,
    description: &str,
    price: i64,
    category: &str,
    image: &str,
    popular: bool,
) -> NewMenuItem {
    NewMenuItem {
        name: name.to_string(),
        description: description.to_string(),
        price: Price::whole(price),
        category: category.to_string(),
        image: Some(image.to_string()),
        popular,
    }
}

/// The eight sample dishes, in catalog order.
#[must_use]
pub fn menu_items() -> Vec<NewMenuItem> {
    vec![
        entry(
            "Margherita Pizza",
            "Fresh tomatoes, mozzarella, and basil",
            299,
            "pizza",
            "/images/pizza.jpg",
            true,
        ),
        entry(
            "Pasta Carbonara",
            "Creamy pasta with pancetta and parmesan",
            249,
            "pasta",
            "/images/carbo.jpg",
            true,
        ),
        entry(
            "Chocolate Lava Cake",
            "Warm chocolate cake with a molten center",
            179,
            "dessert",
            "/images/lavas.jpg",
            true,
        ),
        entry(
            "Caesar Salad",
            "Fresh romaine lettuce with Caesar dressing",
            199,
            "salad",
            "/images/salad.jpg",
            false,
        ),
        entry(
            "Grilled Salmon",
            "Fresh salmon with lemon butter sauce",
            399,
            "main",
            "/images/salmon.jpg",
            false,
        ),
        entry(
            "Mojito",
            "Refreshing mint and lime cocktail",
            149,
            "drinks",
            "/images/mojito.jpg",
            true,
        ),
        entry(
            "Classic Burger",
            "Juicy beef patty with fresh vegetables",
            189,
            "main",
            "/images/burger.jpg",
            false,
        ),
        entry(
            "Veggie Burger",
            "Plant-based patty with fresh vegetables",
            169,
            "main",
            "/images/burger.jpg",
            false,
        ),
    ]
}
