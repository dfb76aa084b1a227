#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

/// Page sections in document order.
pub const SECTIONS: &[Section] = &[
    Section { id: "home", label: "Home" },
    Section { id: "about", label: "About" },
    Section { id: "achievements", label: "Achievements" },
    Section { id: "students", label: "Students" },
    Section { id: "training", label: "Training" },
    Section { id: "contact", label: "Contact" },
];

// (icon, title, subtitle)
pub const HIGHLIGHTS: &[(&str, &str, &str)] = &[
    ("👥", "Beginner & Advanced", "Coaching"),
    ("🎯", "Competitive Training", "Programs"),
    ("⭐", "Personalized Tennis", "Drills"),
];

pub struct Achievement {
    pub icon: &'static str,
    pub title: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        icon: "🏆",
        title: "Coach In Sofitel Philippine Plaza",
        period: "18+ Years",
        description: "Extensive experience coaching and mentoring players at a prestigious venue.",
    },
    Achievement {
        icon: "⭐",
        title: "Junior Player Development",
        period: "Ongoing Success",
        description: "Coached 3 junior players to national-level tournaments, showcasing effective training methods.",
    },
    Achievement {
        icon: "👥",
        title: "Professional Coaching",
        period: "40+ Years",
        description: "Over a decade of professional coaching experience with players of all skill levels.",
    },
];

pub struct StudentPhoto {
    pub src: &'static str,
    pub alt: &'static str,
    pub title: &'static str,
    pub caption: &'static str,
}

pub const STUDENT_PHOTOS: &[StudentPhoto] = &[
    StudentPhoto {
        src: "/picture1.jpg",
        alt: "Student practicing forehand technique",
        title: "Forehand Training",
        caption: "Beginner Level Progress",
    },
    StudentPhoto {
        src: "/picture2.jpg",
        alt: "Student practicing serve technique",
        title: "Serve Technique",
        caption: "Intermediate Training",
    },
    StudentPhoto {
        src: "/picture3.jpg",
        alt: "Group training session with junior players",
        title: "Group Training",
        caption: "Junior Development",
    },
    StudentPhoto {
        src: "/picture4.jpg",
        alt: "Student working on backhand with coach guidance",
        title: "Backhand Drills",
        caption: "Technical Improvement",
    },
    StudentPhoto {
        src: "/placeholder.svg",
        alt: "Student celebrating tournament victory",
        title: "Tournament Success",
        caption: "Competition Ready",
    },
    StudentPhoto {
        src: "/placeholder.svg",
        alt: "Adult student learning proper grip technique",
        title: "Adult Beginner",
        caption: "Fundamentals Focus",
    },
];

// (value, label)
pub const STATS: &[(&str, &str)] = &[
    ("20+", "Students Trained"),
    ("15", "Tournament Winners"),
    ("95%", "Improvement Rate"),
    ("40+", "Years Experience"),
];

pub const PROGRAMS: &[&str] = &[
    "Beginner Fundamentals",
    "Intermediate Skills",
    "Advanced Techniques",
    "Competitive Preparation",
    "Private Sessions",
    "Group Training",
];

pub const SOCIAL_LINKS: &[&str] = &["Facebook", "Instagram", "YouTube"];

/// Reveal delay for the `index`th item of a staggered row.
pub fn stagger_delay(base_ms: u32, step_ms: u32, index: usize) -> u32 {
    base_ms + step_ms * index as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn section_ids_are_unique_and_start_at_home() {
        let ids: HashSet<_> = SECTIONS.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), SECTIONS.len());
        assert_eq!(SECTIONS[0].id, "home");
    }

    #[test]
    fn gallery_stagger_matches_page_timing() {
        let delays: Vec<u32> = (0..STUDENT_PHOTOS.len()).map(|i| stagger_delay(200, 100, i)).collect();
        assert_eq!(delays, vec![200, 300, 400, 500, 600, 700]);
        assert_eq!(stagger_delay(200, 200, 2), 600);
    }
}
