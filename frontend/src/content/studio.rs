use super::{BlogPost, ContactDetail, Service, Stat, Testimonial};
use crate::components::icon::IconKind;
use crate::portfolio::{Category, PortfolioItem};

pub const HERO_PHOTO: &str = "photo-1487412720507-e7ab37603c6f";
pub const ABOUT_PHOTO: &str = "photo-1522337360788-8b13dee7a37e";

pub static ABOUT_PARAGRAPHS: [&str; 3] = [
    "Passionnée par l'art du maquillage depuis plus de 10 ans, j'ai développé une expertise unique dans la mise en beauté haut de gamme, adaptée à chaque carnation et chaque personnalité.",
    "Formée aux techniques les plus pointues du maquillage de mariée et éditorial, je mets mon savoir-faire au service de votre élégance, que ce soit pour votre jour J, un shooting photo professionnel ou simplement pour apprendre à sublimer votre beauté au quotidien.",
    "Ma philosophie : des looks intemporels, une peau lumineuse et une mise en beauté qui révèle votre éclat naturel plutôt que de le masquer.",
];

pub static STATS: [Stat; 2] = [
    Stat {
        icon: IconKind::Award,
        value: "10+",
        label: "Années d'expérience",
    },
    Stat {
        icon: IconKind::Heart,
        value: "500+",
        label: "Clientes satisfaites",
    },
];

pub static SERVICES: [Service; 4] = [
    Service {
        icon: IconKind::Heart,
        title: "Maquillage Mariage",
        bullets: [
            "Essai mariage dans le studio",
            "Déplacement le jour J",
            "Mise en beauté élégante & longue tenue",
            "Adaptée à toutes carnations",
        ],
        cta_label: "Réservez votre date",
    },
    Service {
        icon: IconKind::Users,
        title: "Formation Makeup",
        bullets: [
            "Auto-maquillage & techniques pro",
            "Ateliers personnalisés ou groupe",
            "Idéal débutantes ou futures MUA",
            "Techniques adaptées à votre peau",
        ],
        cta_label: "Rejoindre une formation",
    },
    Service {
        icon: IconKind::Sparkles,
        title: "Coaching Beauté",
        bullets: [
            "Diagnostic beauté personnalisé",
            "Shopping accompagné",
            "Routine sur-mesure",
            "Conseils produits adaptés",
        ],
        cta_label: "Commencer mon coaching",
    },
    Service {
        icon: IconKind::Camera,
        title: "Shooting & Photo",
        bullets: [
            "Éditorial, mode, marque",
            "Book mannequin",
            "Studio ou déplacement",
            "Peau parfaite haute définition",
        ],
        cta_label: "Sublimer mon shooting",
    },
];

pub static PORTFOLIO: [PortfolioItem; 6] = [
    PortfolioItem {
        id: 1,
        category: Category::Mariage,
        photo_id: "photo-1519741497674-611481863552",
    },
    PortfolioItem {
        id: 2,
        category: Category::Editorial,
        photo_id: "photo-1512496015851-a90fb38ba796",
    },
    PortfolioItem {
        id: 3,
        category: Category::Beaute,
        photo_id: "photo-1487412720507-e7ab37603c6f",
    },
    PortfolioItem {
        id: 4,
        category: Category::Mariage,
        photo_id: "photo-1595433707802-6b2626ef1c91",
    },
    PortfolioItem {
        id: 5,
        category: Category::Editorial,
        photo_id: "photo-1516975080664-ed2fc6a32937",
    },
    PortfolioItem {
        id: 6,
        category: Category::Mariage,
        photo_id: "photo-1522337660859-02fbefca4702",
    },
];

pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        text: "Zineb a sublimé mon mariage ! Un maquillage naturel qui a tenu toute la journée et toute la nuit. Je me sentais tellement belle et moi-même. Merci infiniment !",
        author_name: "Leila K.",
        role: "Mariée 2024",
        rating: 5,
    },
    Testimonial {
        text: "Grâce à sa formation, j'ai enfin appris à me maquiller correctement. Zineb est pédagogue, douce et vraiment passionnée. Je recommande à 100%.",
        author_name: "Sophia M.",
        role: "Formation auto-maquillage",
        rating: 5,
    },
    Testimonial {
        text: "Professionnalisme et élégance. Zineb sait exactement comment sublimer chaque carnation. Mes shootings n'ont jamais été aussi réussis !",
        author_name: "Amira B.",
        role: "Mannequin",
        rating: 5,
    },
];

pub static BLOG_POSTS: [BlogPost; 3] = [
    BlogPost {
        photo_id: "photo-1522335789203-aabd1fc54bc9",
        category: "Conseils Mariées",
        title: "Comment préparer sa peau avant le jour J",
        excerpt: "Les rituels beauté essentiels à commencer 3 mois avant votre mariage pour une peau parfaite.",
        published: "2024-11-15",
    },
    BlogPost {
        photo_id: "photo-1596704017254-9b121068314b",
        category: "Tendances",
        title: "Les tendances maquillage 2024",
        excerpt: "Découvrez les looks qui vont marquer cette année : naturel sophistiqué et éclat lumineux.",
        published: "2024-11-10",
    },
    BlogPost {
        photo_id: "photo-1512496015851-a90fb38ba796",
        category: "Tutos",
        title: "Réussir un smokey eye élégant",
        excerpt: "Le guide étape par étape pour un smokey eye sophistiqué adapté à votre forme d'œil.",
        published: "2024-11-05",
    },
];

pub static SERVICE_OPTIONS: [&str; 5] = [
    "Maquillage Mariage",
    "Formation Makeup",
    "Coaching Beauté",
    "Shooting Photo",
    "Autre",
];

pub static CONTACT_DETAILS: [ContactDetail; 4] = [
    ContactDetail {
        icon: IconKind::Phone,
        label: "Téléphone / WhatsApp",
        lines: &[crate::config::CONTACT_PHONE],
    },
    ContactDetail {
        icon: IconKind::Mail,
        label: "Email",
        lines: &[crate::config::CONTACT_EMAIL],
    },
    ContactDetail {
        icon: IconKind::MapPin,
        label: "Studio",
        lines: &["Casablanca, Maroc", "Déplacements possibles"],
    },
    ContactDetail {
        icon: IconKind::Calendar,
        label: "Horaires",
        lines: &["Lun - Sam : 9h - 19h", "Sur rendez-vous uniquement"],
    },
];

/// Footer "Services" column.
pub static FOOTER_SERVICES: [&str; 4] = [
    "Maquillage Mariage",
    "Formation Makeup",
    "Coaching Beauté",
    "Shooting Photo",
];
