/// A profile link shown in the footer and on the contact page.
#[derive(Debug, Clone, Copy)]
pub struct Social {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct SiteInfo {
    pub owner: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub location: &'static str,
    pub socials: &'static [Social],
}

pub const SITE: SiteInfo = SiteInfo {
    owner: "Jordan Avery",
    title: "Cloud & Platform Engineer",
    tagline: "I design reliable cloud platforms and the developer tooling that sits on top of them.",
    email: "hello@jordanavery.dev",
    location: "Portland, OR",
    socials: &[
        Social {
            label: "GitHub",
            href: "https://github.com/jordanavery",
            icon: "devicon-github-plain",
        },
        Social {
            label: "LinkedIn",
            href: "https://linkedin.com/in/jordanavery",
            icon: "devicon-linkedin-plain",
        },
    ],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Class put on the page wrapper; tailwind's `dark:` variants key off it.
    pub fn class(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Dark => "☀",
            Self::Light => "☾",
        }
    }
}
