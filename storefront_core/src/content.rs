//! Static page copy.
//!
//! Mode-specific blocks live in [`ModeContent`]; testimonials and achievement
//! counters are shared by both modes.

use crate::mode::BusinessMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroCopy {
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// Card in the products grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductCard {
    pub title: &'static str,
    pub blurb: &'static str,
    pub price: &'static str,
    pub cta: &'static str,
}

/// Wide card in the services grid. `tag` labels the image placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServicePackage {
    pub tag: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
    pub cta: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub project: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub value: &'static str,
    pub label: &'static str,
}

/// Everything that changes with the business mode, apart from slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeContent {
    pub hero: HeroCopy,
    pub products_heading: &'static str,
    pub products: &'static [ProductCard],
    pub services_heading: &'static str,
    pub services: &'static [ServicePackage],
}

pub const TESTIMONIALS_HEADING: &str = "Client Testimonials & Achievements";
pub const ACHIEVEMENTS_HEADING: &str = "Our Achievements";
pub const CONTACT_HEADING: &str = "Contact Us";

/// Closing line under the page, naming both businesses.
pub const FOOTER_NOTE: &str = "R.K. Building Materials \u{b7} Raj Tent And Caterers";

const MATERIALS: ModeContent = ModeContent {
    hero: HeroCopy {
        title: "Quality Building Materials for Your Construction Needs",
        subtitle: "Providing high-quality building materials including cement, steel, and more to make your construction project successful.",
    },
    products_heading: "Our Building Materials",
    products: &[
        ProductCard {
            title: "Premium Cement",
            blurb: "High-quality cement for all construction needs, available in various types including OPC, PPC, and more.",
            price: "₹350/bag",
            cta: "View Details",
        },
        ProductCard {
            title: "Steel Reinforcement",
            blurb: "High-tensile steel bars for reinforced concrete structures, available in various sizes.",
            price: "₹65/kg",
            cta: "View Details",
        },
        ProductCard {
            title: "Bricks & Blocks",
            blurb: "Quality clay bricks, fly ash bricks, and concrete blocks for sturdy construction.",
            price: "₹6/piece",
            cta: "View Details",
        },
    ],
    services_heading: "Our Services",
    services: &[
        ServicePackage {
            tag: "Delivery",
            title: "Fast Delivery",
            blurb: "We provide quick and reliable delivery services for all our building materials to your construction site.",
            cta: "Learn More",
        },
        ServicePackage {
            tag: "Consultation",
            title: "Expert Consultation",
            blurb: "Our experts provide valuable advice on selecting the right materials for your specific construction needs.",
            cta: "Book Consultation",
        },
    ],
};

const CATERING: ModeContent = ModeContent {
    hero: HeroCopy {
        title: "Premium Tent & Catering Services for Your Special Events",
        subtitle: "Creating memorable experiences with elegant tent setups and delicious catering for all your special occasions.",
    },
    products_heading: "Our Services",
    products: &[
        ProductCard {
            title: "Wedding Tents",
            blurb: "Elegant tent arrangements for weddings with customizable decorations and seating.",
            price: "Custom Pricing",
            cta: "Inquire",
        },
        ProductCard {
            title: "Corporate Events",
            blurb: "Professional tent setups and catering services for corporate events and business functions.",
            price: "Custom Pricing",
            cta: "Inquire",
        },
        ProductCard {
            title: "Premium Catering",
            blurb: "Delicious catering options with a variety of cuisines available for all types of events.",
            price: "₹450/plate",
            cta: "View Menu",
        },
    ],
    services_heading: "Event Packages",
    services: &[
        ServicePackage {
            tag: "Wedding",
            title: "Wedding Package",
            blurb: "Complete wedding solution including elegant tent setup, premium catering, and customized decorations.",
            cta: "Get Quote",
        },
        ServicePackage {
            tag: "Corporate",
            title: "Corporate Event Package",
            blurb: "Professional arrangements for corporate events with customized branding and high-quality catering.",
            cta: "Get Quote",
        },
    ],
};

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "The building materials provided were of exceptional quality. Our construction project was completed ahead of schedule thanks to their reliable supplies and timely delivery.",
        author: "Rajesh Construction Co.",
        project: "Commercial Complex Project",
    },
    Testimonial {
        quote: "The tent arrangement for our daughter's wedding was simply beautiful. The catering service was outstanding with delicious food that all our guests loved.",
        author: "Sharma Family",
        project: "Wedding Event",
    },
    Testimonial {
        quote: "We've been using their cement for all our housing projects. The consistency in quality has made them our preferred supplier for the past 5 years.",
        author: "Greenview Developers",
        project: "Residential Project",
    },
];

pub const ACHIEVEMENTS: [Achievement; 4] = [
    Achievement {
        value: "500+",
        label: "Projects Completed",
    },
    Achievement {
        value: "98%",
        label: "Customer Satisfaction",
    },
    Achievement {
        value: "10+",
        label: "Years of Experience",
    },
    Achievement {
        value: "50+",
        label: "Corporate Clients",
    },
];

impl ModeContent {
    pub fn for_mode(mode: BusinessMode) -> &'static ModeContent {
        match mode {
            BusinessMode::Materials => &MATERIALS,
            BusinessMode::Catering => &CATERING,
        }
    }
}
