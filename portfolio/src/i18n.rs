//! Every piece of localized page copy.

use portfolio_config::Locale;

/// Labels of the navigation bar.
#[derive(Debug)]
pub struct NavText {
    pub about: &'static str,
    pub journey: &'static str,
    pub skills: &'static str,
    pub projects: &'static str,
    pub contact: &'static str,
}

#[derive(Debug)]
pub struct HeroText {
    pub greeting: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub view_work: &'static str,
    pub view_github: &'static str,
    /// Cycled through by the typewriter after the greeting.
    pub phrases: [&'static str; 4],
}

#[derive(Debug)]
pub struct AboutText {
    pub title: &'static str,
    pub paragraphs: [&'static str; 3],
    pub student: &'static str,
    pub open_to: &'static str,
    pub location: &'static str,
    pub collaboration: &'static str,
    pub hometown: &'static str,
}

#[derive(Debug)]
pub struct ContactText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub interested: &'static str,
}

/// The page copy for one locale.
#[derive(Debug)]
pub struct Translations {
    pub nav: NavText,
    pub hero: HeroText,
    pub about: AboutText,
    pub timeline_title: &'static str,
    pub skills_title: &'static str,
    pub projects_title: &'static str,
    pub contact: ContactText,
    pub footer: &'static str,
}

/// Returns the page copy for `locale`.
pub fn translations(locale: Locale) -> &'static Translations {
    match locale {
        Locale::En => &EN,
        Locale::Id => &ID,
    }
}

/// The phrases typed out after the hero greeting.
pub fn hero_phrases(locale: Locale) -> &'static [&'static str] {
    &translations(locale).hero.phrases
}

/// Label of the language toggle: the locale a click switches *to*.
pub fn toggle_label(locale: Locale) -> &'static str {
    match locale.toggle() {
        Locale::En => "EN",
        Locale::Id => "ID",
    }
}

static EN: Translations = Translations {
    nav: NavText {
        about: "About",
        journey: "Journey",
        skills: "Skills",
        projects: "Projects",
        contact: "Contact",
    },
    hero: HeroText {
        greeting: "Hi, I'm",
        title: "An ambitious student developer passionate about coding, \
                learning, and creating digital experiences",
        subtitle: "Currently a student at SMKN 2 Magelang, I specialize in \
                   full-stack web development and game development. I'm \
                   dedicated to mastering multiple programming languages and \
                   frameworks while collaborating with talented developers.",
        view_work: "View My Work",
        view_github: "View GitHub",
        phrases: ["Warid", "a developer", "a human", "a programmer"],
    },
    about: AboutText {
        title: "About Me",
        paragraphs: [
            "I'm an ambitious and passionate developer with a keen interest \
             in web development, game design, physics, and music. My journey \
             in tech started with a curiosity about how things work, and it \
             has evolved into a commitment to building meaningful digital \
             solutions.",
            "Currently studying at SMKN 2 Magelang, I'm actively learning and \
             experimenting with modern technologies including Dart, Flutter, \
             C#, JavaScript, and Python. I believe in continuous learning and \
             collaborating with passionate developers to push the boundaries \
             of what's possible.",
            "When I'm not coding, you can find me exploring new game engines, \
             discussing physics concepts, or enjoying music. I'm open to \
             collaboration and always excited to work on projects that \
             challenge my skills.",
        ],
        student: "Student at",
        open_to: "Open to",
        location: "Location",
        collaboration: "Collaboration & freelance projects",
        hometown: "Magelang, Indonesia",
    },
    timeline_title: "My Journey",
    skills_title: "Skills & Technologies",
    projects_title: "Featured Projects",
    contact: ContactText {
        title: "Let's Connect",
        subtitle: "I'm always interested in hearing about new projects and \
                   opportunities. Feel free to reach out!",
        interested: "Interested in collaborating or just want to chat? I'm \
                     always down for interesting conversations!",
    },
    footer: "© 2025 Warid27. Built with Leptos and Rust.",
};

static ID: Translations = Translations {
    nav: NavText {
        about: "Tentang",
        journey: "Perjalanan",
        skills: "Keahlian",
        projects: "Proyek",
        contact: "Kontak",
    },
    hero: HeroText {
        greeting: "Halo, Saya",
        title: "Seorang developer mahasiswa yang passionate tentang coding, \
                belajar, dan menciptakan pengalaman digital",
        subtitle: "Saat ini seorang siswa di SMKN 2 Magelang, saya \
                   spesialisasi dalam web development full-stack dan game \
                   development. Saya berkomitmen untuk menguasai berbagai \
                   bahasa pemrograman dan framework sambil berkolaborasi \
                   dengan developer berbakat.",
        view_work: "Lihat Karya Saya",
        view_github: "Lihat GitHub",
        phrases: ["Warid", "seorang developer", "manusia", "programmer"],
    },
    about: AboutText {
        title: "Tentang Saya",
        paragraphs: [
            "Saya seorang developer yang passionate dan ambisius dengan minat \
             khusus pada web development, game design, physics, dan musik. \
             Perjalanan saya di tech dimulai dengan curiosity tentang \
             bagaimana sesuatu bekerja, dan berkembang menjadi komitmen untuk \
             membangun solusi digital yang bermakna.",
            "Saat ini belajar di SMKN 2 Magelang, saya aktif belajar dan \
             bereksperimen dengan teknologi modern termasuk Dart, Flutter, \
             C#, JavaScript, dan Python. Saya percaya pada pembelajaran \
             berkelanjutan dan kolaborasi dengan developer passionate untuk \
             mendorong batasan dari yang mungkin.",
            "Ketika tidak coding, Anda bisa menemukan saya mengeksplorasi game \
             engine baru, mendiskusikan konsep physics, atau menikmati musik. \
             Saya terbuka untuk kolaborasi dan selalu excited untuk bekerja \
             pada proyek yang menantang skill saya.",
        ],
        student: "Mahasiswa di",
        open_to: "Terbuka untuk",
        location: "Lokasi",
        collaboration: "Proyek collaboration & freelance",
        hometown: "Magelang, Indonesia",
    },
    timeline_title: "Perjalanan Saya",
    skills_title: "Keahlian & Teknologi",
    projects_title: "Proyek Unggulan",
    contact: ContactText {
        title: "Mari Terhubung",
        subtitle: "Saya selalu tertarik mendengar tentang proyek dan peluang \
                   baru. Silakan hubungi saya!",
        interested: "Tertarik berkolaborasi atau hanya ingin chatting? Saya \
                     selalu siap untuk percakapan menarik!",
    },
    footer: "© 2025 Warid27. Dibuat dengan Leptos dan Rust.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_locales_have_four_phrases_starting_with_the_name() {
        for locale in [Locale::En, Locale::Id] {
            let phrases = hero_phrases(locale);
            assert_eq!(phrases.len(), 4);
            assert_eq!(phrases[0], "Warid");
            assert!(phrases.iter().all(|p| !p.is_empty()));
        }
    }

    #[test]
    fn phrase_lists_differ_between_locales() {
        assert_eq!(
            hero_phrases(Locale::En),
            ["Warid", "a developer", "a human", "a programmer"]
        );
        assert_eq!(
            hero_phrases(Locale::Id),
            ["Warid", "seorang developer", "manusia", "programmer"]
        );
    }

    #[test]
    fn toggle_label_names_the_other_language() {
        assert_eq!(toggle_label(Locale::En), "ID");
        assert_eq!(toggle_label(Locale::Id), "EN");
    }

    #[test]
    fn translations_follow_the_locale() {
        assert_eq!(translations(Locale::En).nav.about, "About");
        assert_eq!(translations(Locale::Id).nav.about, "Tentang");
        assert_eq!(translations(Locale::Id).contact.title, "Mari Terhubung");
    }

    #[test]
    fn footer_names_the_actual_stack() {
        for locale in [Locale::En, Locale::Id] {
            let footer = translations(locale).footer;
            assert!(footer.contains("Leptos"), "{footer}");
            assert!(!footer.contains("Tailwind"), "{footer}");
        }
    }

    #[test]
    fn line_continuations_leave_single_spaces() {
        for locale in [Locale::En, Locale::Id] {
            let t = translations(locale);
            for text in t.about.paragraphs.iter().chain([
                &t.hero.title,
                &t.hero.subtitle,
                &t.contact.subtitle,
                &t.contact.interested,
            ]) {
                assert!(!text.contains("  "), "double space in {text:?}");
            }
        }
    }
}
