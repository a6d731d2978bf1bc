//! # Portfolio Content
//!
//! The sections, the person behind the portfolio, their projects and
//! social links. Defaults describe the author's own portfolio; the config file
//! can replace any of it (see `core::config`).

use serde::{Deserialize, Serialize};

/// How many projects the gallery shows before pointing at GitHub.
pub const GALLERY_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    About,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::About, Section::Projects, Section::Contact];

    pub fn from_index(index: usize) -> Option<Section> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        match self {
            Section::About => 0,
            Section::Projects => 1,
            Section::Contact => 2,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    /// Browse-mode hotkey that opens the link.
    pub key: char,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    /// Markdown.
    pub bio: String,
    pub avatar_initials: String,
    pub email: String,
    pub location: String,
    pub github_user: String,
    pub projects: Vec<Project>,
    pub socials: Vec<SocialLink>,
}

impl Profile {
    /// Projects shown in the gallery.
    pub fn featured_projects(&self) -> &[Project] {
        let end = self.projects.len().min(GALLERY_SIZE);
        &self.projects[..end]
    }

    pub fn github_repos_url(&self) -> String {
        format!("https://github.com/{}?tab=repositories", self.github_user)
    }

    pub fn social_for_key(&self, key: char) -> Option<&SocialLink> {
        self.socials.iter().find(|s| s.key == key)
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Barış Manço Özdemir".to_string(),
            headline: "Frontend & Mobile Developer".to_string(),
            bio: "I'm developing cross-platform mobile applications and web applications."
                .to_string(),
            avatar_initials: "BÖ".to_string(),
            email: "wpbaris@gmail.com".to_string(),
            location: "Istanbul, Turkey".to_string(),
            github_user: "urnere".to_string(),
            projects: default_projects(),
            socials: default_socials(),
        }
    }
}

fn default_projects() -> Vec<Project> {
    vec![
        Project {
            id: "alpha".to_string(),
            title: "Pet Adoption App".to_string(),
            description: "This app is a mobile app developed to simplify the pet adoption \
                process. Users can add their pets, communicate with other users, and save their \
                favorite animals. The app is integrated with Firebase and includes a messaging \
                system that allows users to chat."
                .to_string(),
            link: "https://github.com/urnere/Pet-Adopt-App".to_string(),
        },
        Project {
            id: "beta".to_string(),
            title: "Chat App".to_string(),
            description: "A user-friendly mobile chat app with real-time messaging built using \
                Flutter and Firebase. It offers secure authentication, media sharing, and \
                multi-platform support."
                .to_string(),
            link: "https://github.com/urnere/chatapp".to_string(),
        },
        Project {
            id: "gamma".to_string(),
            title: "Word App".to_string(),
            description: "A Flutter application designed to help users learn and memorize \
                foreign language vocabulary. This app allows users to create, manage, and track \
                their progress with English-Turkish word pairs."
                .to_string(),
            link: "https://github.com/urnere/WordApp".to_string(),
        },
    ]
}

fn default_socials() -> Vec<SocialLink> {
    vec![
        SocialLink {
            name: "GitHub".to_string(),
            url: "https://github.com/urnere".to_string(),
            key: 'g',
        },
        SocialLink {
            name: "LinkedIn".to_string(),
            url: "https://linkedin.com/in/urnere".to_string(),
            key: 'i',
        },
    ]
}
