use crate::models::{DecorItem, Dimensions, ItemCategory, RoomType, StyleTag};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// The built-in catalog served when no product API is configured
///
/// Order matters: alternatives are taken from the front of the catalog.
pub fn reference_items() -> Vec<DecorItem> {
    vec![
        DecorItem {
            id: "1".to_string(),
            name: "Vintage Brass Floor Lamp".to_string(),
            image_reference: "https://images.unsplash.com/photo-1618160702438-9b02ab6515c9"
                .to_string(),
            description: "Elegant brass floor lamp with adjustable arm and glass shade."
                .to_string(),
            price: Some(299.0),
            styles: vec![StyleTag::Vintage],
            colors: strings(&["gold", "brass"]),
            category: ItemCategory::Lighting,
            subtype: Some("floor lamp".to_string()),
            suitable_room_types: vec![RoomType::Living, RoomType::Bedroom, RoomType::Office],
            dimensions: Some(Dimensions {
                width: 30,
                height: 160,
                depth: 30,
            }),
        },
        DecorItem {
            id: "2".to_string(),
            name: "Mid-Century Armchair".to_string(),
            image_reference: "https://images.unsplash.com/photo-1472396961693-142e6e269027"
                .to_string(),
            description: "Iconic mid-century design with walnut frame and beige upholstery."
                .to_string(),
            price: Some(599.0),
            styles: vec![StyleTag::MidCentury, StyleTag::Minimalist],
            colors: strings(&["beige", "brown"]),
            category: ItemCategory::Seating,
            subtype: Some("armchair".to_string()),
            suitable_room_types: vec![RoomType::Living, RoomType::Office],
            dimensions: Some(Dimensions {
                width: 70,
                height: 85,
                depth: 75,
            }),
        },
        DecorItem {
            id: "3".to_string(),
            name: "Industrial Wall Shelf".to_string(),
            image_reference: "https://images.unsplash.com/photo-1582562124811-c09040d0a901"
                .to_string(),
            description: "Rustic wood and metal wall shelving unit with 3 tiers.".to_string(),
            price: Some(189.0),
            styles: vec![StyleTag::Industrial],
            colors: strings(&["brown", "black"]),
            category: ItemCategory::WallDecor,
            subtype: Some("wall shelf".to_string()),
            suitable_room_types: vec![
                RoomType::Living,
                RoomType::Bedroom,
                RoomType::Office,
                RoomType::Dining,
            ],
            dimensions: Some(Dimensions {
                width: 100,
                height: 90,
                depth: 25,
            }),
        },
        DecorItem {
            id: "4".to_string(),
            name: "Bohemian Woven Wall Hanging".to_string(),
            image_reference: "https://images.unsplash.com/photo-1488590528505-98d2b5aba04b"
                .to_string(),
            description: "Handcrafted macrame wall hanging with natural cotton fibers."
                .to_string(),
            price: Some(129.0),
            styles: vec![StyleTag::Boho],
            colors: strings(&["beige", "cream", "white"]),
            category: ItemCategory::WallDecor,
            subtype: Some("wall hanging".to_string()),
            suitable_room_types: vec![RoomType::Living, RoomType::Bedroom, RoomType::Dining],
            dimensions: Some(Dimensions {
                width: 80,
                height: 120,
                depth: 2,
            }),
        },
        DecorItem {
            id: "5".to_string(),
            name: "Scandinavian Coffee Table".to_string(),
            image_reference: "https://images.unsplash.com/photo-1582562124811-c09040d0a901"
                .to_string(),
            description: "Minimalist oak coffee table with hairpin legs.".to_string(),
            price: Some(349.0),
            styles: vec![StyleTag::Scandinavian, StyleTag::Minimalist],
            colors: strings(&["light brown", "black"]),
            category: ItemCategory::Table,
            subtype: Some("coffee table".to_string()),
            suitable_room_types: vec![RoomType::Living],
            dimensions: Some(Dimensions {
                width: 120,
                height: 45,
                depth: 60,
            }),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_ids_are_sequential() {
        let ids: Vec<String> = reference_items().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_declared_category_agrees_with_name_inference() {
        for item in reference_items() {
            assert_eq!(
                ItemCategory::infer_from_name(&item.name),
                item.category,
                "item {}",
                item.id
            );
        }
    }
}
