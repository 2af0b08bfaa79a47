//! Reference data of the style quiz: eight questions and one result
//! profile per style tag.

use crate::models::{QuizOption, StyleQuestion, StyleRecommendations, StyleResultProfile, StyleTag};

const fn option(option_id: &'static str, text: &'static str, style_tag: StyleTag) -> QuizOption {
    QuizOption {
        option_id,
        text,
        style_tag,
    }
}

/// Quiz questions in the order answers must be supplied
pub static STYLE_QUESTIONS: [StyleQuestion; 8] = [
    StyleQuestion {
        id: 1,
        question_text: "Which color palette most appeals to you for a living space?",
        options: &[
            option("1a", "Warm neutrals with patina and aged metals", StyleTag::Vintage),
            option("1b", "Raw metals, dark woods, and brick tones", StyleTag::Industrial),
            option("1c", "Earthy tones with pops of color and patterns", StyleTag::Boho),
            option("1d", "Clean whites and blacks with minimal color", StyleTag::Minimalist),
            option("1e", "Light woods with soft grays and blues", StyleTag::Scandinavian),
            option("1f", "Warm woods with orange, olive, and mustard", StyleTag::MidCentury),
        ],
    },
    StyleQuestion {
        id: 2,
        question_text: "What kind of materials do you prefer in your furniture?",
        options: &[
            option("2a", "Antique woods, velvet, and brass", StyleTag::Vintage),
            option("2b", "Exposed steel, reclaimed wood, and leather", StyleTag::Industrial),
            option("2c", "Natural fibers, rattan, and global textiles", StyleTag::Boho),
            option("2d", "Sleek, clean materials with simple lines", StyleTag::Minimalist),
            option("2e", "Light woods, wool, and natural textiles", StyleTag::Scandinavian),
            option("2f", "Walnut wood, tweed, and geometric patterns", StyleTag::MidCentury),
        ],
    },
    StyleQuestion {
        id: 3,
        question_text: "How would you describe your ideal room atmosphere?",
        options: &[
            option("3a", "Elegant with history and character", StyleTag::Vintage),
            option("3b", "Raw, edgy, and utilitarian", StyleTag::Industrial),
            option("3c", "Free-spirited, layered, and organic", StyleTag::Boho),
            option("3d", "Clean, uncluttered, and serene", StyleTag::Minimalist),
            option("3e", "Cozy, bright, and functional", StyleTag::Scandinavian),
            option("3f", "Retro-inspired with clean lines", StyleTag::MidCentury),
        ],
    },
    StyleQuestion {
        id: 4,
        question_text: "Which patterns are you most drawn to?",
        options: &[
            option("4a", "Florals, damask, and ornate designs", StyleTag::Vintage),
            option("4b", "Minimal to no patterns, focus on textures", StyleTag::Industrial),
            option("4c", "Global patterns, ikat, and macramé", StyleTag::Boho),
            option("4d", "Solid colors or very subtle patterns", StyleTag::Minimalist),
            option("4e", "Simple geometric or nature-inspired motifs", StyleTag::Scandinavian),
            option("4f", "Geometric, atomic, and starburst patterns", StyleTag::MidCentury),
        ],
    },
    StyleQuestion {
        id: 5,
        question_text: "What's your approach to decorating?",
        options: &[
            option("5a", "Curated collections of antiques and heirlooms", StyleTag::Vintage),
            option("5b", "Exposed elements with functional décor pieces", StyleTag::Industrial),
            option("5c", "Eclectic mix of global finds and handcrafted items", StyleTag::Boho),
            option("5d", "Only essential pieces with plenty of open space", StyleTag::Minimalist),
            option("5e", "Thoughtful, functional pieces with meaningful touches", StyleTag::Scandinavian),
            option("5f", "Iconic design pieces mixed with bold graphics", StyleTag::MidCentury),
        ],
    },
    StyleQuestion {
        id: 6,
        question_text: "Which historical era inspires you most?",
        options: &[
            option("6a", "Victorian or Art Deco periods", StyleTag::Vintage),
            option("6b", "Early 20th century factories and warehouses", StyleTag::Industrial),
            option("6c", "Global cultures and 1970s bohemian", StyleTag::Boho),
            option("6d", "Contemporary, present-focused design", StyleTag::Minimalist),
            option("6e", "Nordic design of the 20th century", StyleTag::Scandinavian),
            option("6f", "1950s and 1960s American design", StyleTag::MidCentury),
        ],
    },
    StyleQuestion {
        id: 7,
        question_text: "How do you feel about storage and organization?",
        options: &[
            option("7a", "Decorative cabinets, armoires, and vintage containers", StyleTag::Vintage),
            option("7b", "Open shelving, metal lockers, and visible organization", StyleTag::Industrial),
            option("7c", "Baskets, decorative boxes, and flexible storage options", StyleTag::Boho),
            option("7d", "Hidden storage to maintain clean lines and surfaces", StyleTag::Minimalist),
            option("7e", "Practical, multi-functional furniture with smart storage", StyleTag::Scandinavian),
            option("7f", "Statement storage pieces that are functional and stylish", StyleTag::MidCentury),
        ],
    },
    StyleQuestion {
        id: 8,
        question_text: "What lighting style do you prefer?",
        options: &[
            option("8a", "Chandeliers, sconces, and decorative table lamps", StyleTag::Vintage),
            option("8b", "Exposed bulbs, metal pendants, and adjustable task lighting", StyleTag::Industrial),
            option("8c", "Lanterns, string lights, and eclectic lamp styles", StyleTag::Boho),
            option("8d", "Simple, unobtrusive lighting with clean lines", StyleTag::Minimalist),
            option("8e", "Paper pendants, warm wood, and ambient lighting", StyleTag::Scandinavian),
            option("8f", "Sputnik chandeliers, globe lights, and sculptural lamps", StyleTag::MidCentury),
        ],
    },
];

/// Result profiles, one per tag, in [`StyleTag::ALL`] order
pub static STYLE_PROFILES: [StyleResultProfile; 6] = [
    StyleResultProfile {
        style_tag: StyleTag::Vintage,
        name: "Vintage Classic",
        description: "You appreciate pieces with history and character. Your style combines elegance with nostalgia, featuring antique furniture, ornate details, and classic design elements.",
        characteristics: &[
            "Antique and repurposed furniture",
            "Ornate details and craftsmanship",
            "Rich textiles like velvet and brocade",
            "Curated collections and personal treasures",
        ],
        image_reference: "https://images.unsplash.com/photo-1572373548732-1686416eeb55",
        recommendations: StyleRecommendations {
            colors: &["Rich jewel tones", "Gold", "Cream", "Dusty rose"],
            materials: &["Antique wood", "Brass", "Marble", "Crystal"],
            furniture: &["Wingback chairs", "Claw-foot tables", "Hutch cabinets", "Chesterfield sofas"],
            decor: &["Vintage photographs", "Gilded mirrors", "Antique books", "Heritage art pieces"],
        },
    },
    StyleResultProfile {
        style_tag: StyleTag::Industrial,
        name: "Industrial Edge",
        description: "You're drawn to raw, utilitarian spaces with an edge. Your style embraces exposed elements, reclaimed materials, and a workshop-inspired aesthetic that balances form and function.",
        characteristics: &[
            "Exposed architectural elements",
            "Raw materials like metal, brick, and concrete",
            "Utilitarian furniture with clean lines",
            "Minimal ornamentation with focus on function",
        ],
        image_reference: "https://images.unsplash.com/photo-1561108861-ecf5135824c8",
        recommendations: StyleRecommendations {
            colors: &["Charcoal", "Rust", "Black", "Weathered wood tones"],
            materials: &["Reclaimed wood", "Blackened steel", "Concrete", "Exposed brick"],
            furniture: &["Factory stools", "Metal shelving", "Leather sofas", "Workshop tables"],
            decor: &["Vintage signage", "Edison bulb lighting", "Industrial machinery parts", "Metal bins"],
        },
    },
    StyleResultProfile {
        style_tag: StyleTag::Boho,
        name: "Bohemian Spirit",
        description: "You embody a free-spirited approach to decor with a global perspective. Your style mixes patterns, textures, and cultural influences in a relaxed, eclectic, and personal way.",
        characteristics: &[
            "Eclectic mix of patterns and textures",
            "Global influences and handcrafted elements",
            "Plants and natural elements",
            "Layered textiles and warm atmosphere",
        ],
        image_reference: "https://images.unsplash.com/photo-1617104678098-de229db51175",
        recommendations: StyleRecommendations {
            colors: &["Terracotta", "Turquoise", "Saffron", "Emerald"],
            materials: &["Natural fibers", "Rattan", "Jute", "Leather"],
            furniture: &["Floor cushions", "Low-slung sofas", "Rattan chairs", "Carved wood pieces"],
            decor: &["Macramé wall hangings", "Moroccan rugs", "Hanging plants", "Global textiles"],
        },
    },
    StyleResultProfile {
        style_tag: StyleTag::Minimalist,
        name: "Modern Minimalist",
        description: "You value simplicity, clean lines, and purposeful spaces. Your style focuses on quality over quantity, with a 'less is more' philosophy that creates calm, uncluttered environments.",
        characteristics: &[
            "Clean lines and simple forms",
            "Limited color palette",
            "Open space and breathing room",
            "Functional, high-quality pieces",
        ],
        image_reference: "https://images.unsplash.com/photo-1519710164239-da123dc03ef4",
        recommendations: StyleRecommendations {
            colors: &["White", "Black", "Gray", "Occasional muted accent"],
            materials: &["Glass", "Polished concrete", "Smooth wood", "Metal accents"],
            furniture: &["Platform beds", "Simple sofas", "Floating shelves", "Integrated storage"],
            decor: &["Statement art pieces", "Architectural lighting", "Single dramatic plants", "Negative space"],
        },
    },
    StyleResultProfile {
        style_tag: StyleTag::Scandinavian,
        name: "Scandinavian Comfort",
        description: "You embrace the Nordic concept of 'hygge', creating cozy yet bright spaces. Your style balances simplicity and functionality with warm textiles and natural elements.",
        characteristics: &[
            "Light woods and bright spaces",
            "Cozy textiles and natural materials",
            "Simple forms with subtle details",
            "Practical and functional design",
        ],
        image_reference: "https://images.unsplash.com/photo-1519710164239-da123dc03ef4",
        recommendations: StyleRecommendations {
            colors: &["White", "Light gray", "Pale blue", "Blonde wood"],
            materials: &["Light wood", "Wool", "Linen", "Sheepskin"],
            furniture: &["Simple sofas", "Functional storage", "Wooden dining sets", "Accent chairs"],
            decor: &["Woven textiles", "Simple ceramics", "Candles", "Minimal wall art"],
        },
    },
    StyleResultProfile {
        style_tag: StyleTag::MidCentury,
        name: "Mid-Century Modern",
        description: "You appreciate the iconic design era of the 1950s and 60s. Your style features clean lines, organic forms, and a perfect balance between function and form with a retro twist.",
        characteristics: &[
            "Clean lines with organic curves",
            "Mix of traditional and non-traditional materials",
            "Bold graphic patterns",
            "Form follows function philosophy",
        ],
        image_reference: "https://images.unsplash.com/photo-1561108861-ecf5135824c8",
        recommendations: StyleRecommendations {
            colors: &["Mustard", "Teal", "Orange", "Walnut brown"],
            materials: &["Walnut and teak", "Molded plastic", "Glass", "Tweed"],
            furniture: &["Eames-inspired chairs", "Tapered leg sofas", "Sputnik chandeliers", "Sleek credenzas"],
            decor: &["Atomic patterns", "Abstract art", "Sunburst clocks", "Graphic throw pillows"],
        },
    },
];

/// Profile describing a style tag
pub fn profile(tag: StyleTag) -> &'static StyleResultProfile {
    &STYLE_PROFILES[tag.index()]
}
