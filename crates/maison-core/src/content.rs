//! Immutable page content: hero carousel items, featured categories, nav links.
//!
//! Fixed at startup and never mutated; the web frontend builds its DOM from
//! these tables once at init.

#[derive(Clone, Copy, Debug)]
pub struct CarouselItem {
    pub image_url: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Category {
    pub image_url: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const CAROUSEL_ITEMS: [CarouselItem; 3] = [
    CarouselItem {
        image_url:
            "https://images.unsplash.com/photo-1515562141207-7a88fb7ce338?auto=format&fit=crop&q=100&w=3840",
        title: "L'Excellence",
        subtitle: "Collection Prestige 2024",
        description: "Une collection qui transcende le temps",
    },
    CarouselItem {
        image_url:
            "https://images.unsplash.com/photo-1599643478518-a784e5dc4c8f?auto=format&fit=crop&q=100&w=3840",
        title: "Artisanat d'Exception",
        subtitle: "Bijoux Signature",
        description: "L'art de la perfection",
    },
    CarouselItem {
        image_url:
            "https://images.unsplash.com/photo-1584917865442-de89df76afd3?auto=format&fit=crop&q=100&w=3840",
        title: "Édition Limitée",
        subtitle: "Collection Exclusive",
        description: "Une vision unique du luxe",
    },
];

pub const CATEGORIES: [Category; 3] = [
    Category {
        image_url:
            "https://images.unsplash.com/photo-1599643478518-a784e5dc4c8f?auto=format&fit=crop&q=100&w=3840",
        title: "BIJOUX",
        description: "L'art de la joaillerie",
    },
    Category {
        image_url:
            "https://images.unsplash.com/photo-1584917865442-de89df76afd3?auto=format&fit=crop&q=100&w=3840",
        title: "SACS",
        description: "Élégance intemporelle",
    },
    Category {
        image_url:
            "https://images.unsplash.com/photo-1515562141207-7a88fb7ce338?auto=format&fit=crop&q=100&w=3840",
        title: "ACCESSOIRES",
        description: "Le raffinement absolu",
    },
];

pub const NAV_LINKS: [&str; 4] = ["BIJOUX", "SACS", "NOUVEAUTÉS", "COLLECTIONS"];
