use super::{Stat, Testimonial};
use crate::components::icon::IconKind;

pub const HERO_PHOTO: &str = "photo-1560066984-138dadb4c035";
pub const ABOUT_PHOTO: &str = "photo-1457972729786-0411a3b2b626";

/// Bare skin, the clipped top layer left of the split.
pub const BEFORE_PHOTO: &str = "photo-1531123897727-8f129e1688ce";
/// Finished look, underneath.
pub const AFTER_PHOTO: &str = "photo-1487412720507-e7ab37603c6f";

#[derive(Clone, Debug, PartialEq)]
pub struct Course {
    pub icon: IconKind,
    pub title: &'static str,
    pub duration: &'static str,
    pub level: &'static str,
    pub bullets: &'static [&'static str],
    pub price_label: &'static str,
    /// ISO date of the next intake.
    pub next_session: &'static str,
}

pub static ABOUT_PARAGRAPHS: [&str; 2] = [
    "L'Académie Zineb Moudden transmet plus de 10 ans de métier en studio, sur les plateaux et auprès des mariées. Chaque formation alterne démonstrations, pratique encadrée et retours individuels.",
    "Petits groupes, matériel professionnel fourni et suivi après la formation : vous repartez avec une méthode claire, que vous souhaitiez vous maquiller au quotidien ou lancer votre activité de maquilleuse.",
];

pub static STATS: [Stat; 3] = [
    Stat {
        icon: IconKind::GraduationCap,
        value: "300+",
        label: "Élèves formées",
    },
    Stat {
        icon: IconKind::Users,
        value: "6",
        label: "Élèves max. par groupe",
    },
    Stat {
        icon: IconKind::Award,
        value: "10+",
        label: "Années d'expérience",
    },
];

pub static COURSES: [Course; 3] = [
    Course {
        icon: IconKind::Sparkles,
        title: "Auto-maquillage",
        duration: "1 journée",
        level: "Débutante",
        bullets: &[
            "Préparation de la peau et teint lumineux",
            "Regard jour et soir",
            "Choix des produits adaptés à votre carnation",
        ],
        price_label: "Trousse de démarrage offerte",
        next_session: "2025-01-13",
    },
    Course {
        icon: IconKind::Heart,
        title: "Masterclass Mariée",
        duration: "2 jours",
        level: "Intermédiaire",
        bullets: &[
            "Essai et conseil mariée",
            "Tenue longue durée et retouches",
            "Maquillage pour la photo et la vidéo",
        ],
        price_label: "Certificat de participation",
        next_session: "2025-02-08",
    },
    Course {
        icon: IconKind::GraduationCap,
        title: "Maquilleuse Professionnelle",
        duration: "4 semaines",
        level: "Tous niveaux",
        bullets: &[
            "Hygiène, colorimétrie et morphologie",
            "Mariée, éditorial et beauté haute définition",
            "Constitution de book et lancement d'activité",
            "Stage pratique en studio",
        ],
        price_label: "Certification de l'Académie",
        next_session: "2025-03-03",
    },
];

pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        text: "J'ai suivi la formation professionnelle sans aucune base. Quatre semaines plus tard, je réalisais mes premières mariées. Une pédagogie exigeante et bienveillante.",
        author_name: "Nadia E.",
        role: "Maquilleuse Professionnelle",
        rating: 5,
    },
    Testimonial {
        text: "Une journée pour enfin comprendre ma peau et mes couleurs. Je me maquille en dix minutes le matin et le résultat tient toute la journée.",
        author_name: "Salma T.",
        role: "Auto-maquillage",
        rating: 5,
    },
    Testimonial {
        text: "La masterclass mariée m'a donné la confiance qui me manquait pour les essais. Les retouches longue tenue ont changé ma façon de travailler.",
        author_name: "Yasmine O.",
        role: "Masterclass Mariée",
        rating: 4,
    },
];

pub static EXPERIENCE_OPTIONS: [&str; 3] = ["Débutante", "Intermédiaire", "Professionnelle"];

pub static FOOTER_COURSES: [&str; 3] = [
    "Auto-maquillage",
    "Masterclass Mariée",
    "Maquilleuse Professionnelle",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_lists_every_course() {
        let titles: Vec<&str> = COURSES.iter().map(|c| c.title).collect();
        assert_eq!(titles, FOOTER_COURSES.to_vec());
    }

    #[test]
    fn test_slider_layers_differ() {
        assert_ne!(BEFORE_PHOTO, AFTER_PHOTO);
    }
}
