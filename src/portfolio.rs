use std::collections::HashSet;
use std::sync::LazyLock;

use chrono::{DateTime, Datelike, Utc};
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::ProjectRecord;
use crate::glyph::Glyph;

const PORTFOLIO_FILE: &str = "portfolio.json";

static PORTFOLIO: LazyLock<Result<Portfolio, ContentError>> = LazyLock::new(load);

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("content file {0} is missing")]
    Missing(&'static str),
    #[error("couldn't parse {file}: {message}")]
    Parse { file: &'static str, message: String },
    #[error("project title {0:?} appears more than once")]
    DuplicateTitle(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub owner: Owner,
    pub hero: Hero,
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<ProjectRecord>,
    pub contact: ContactInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Owner {
    pub name: String,
    pub brand: String,
    pub tagline: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hero {
    pub headline_accent: String,
    pub headline: String,
    pub paragraphs: Vec<String>,
    pub image: String,
    pub image_alt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub icon: Glyph,
    pub skills: Vec<String>,
    /// Tailwind gradient stops for the icon badge.
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub linkedin: String,
    pub phone: String,
    pub location: String,
}

impl ContactInfo {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn value(&self, channel: Channel) -> &str {
        match channel {
            Channel::Email => &self.email,
            Channel::LinkedIn => &self.linkedin,
            Channel::Phone => &self.phone,
            Channel::Location => &self.location,
        }
    }
}

/// The contact cards, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Email,
    LinkedIn,
    Phone,
    Location,
}

impl Channel {
    pub const ALL: [Channel; 4] = [
        Channel::Email,
        Channel::LinkedIn,
        Channel::Phone,
        Channel::Location,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Channel::Email => "Email",
            Channel::LinkedIn => "LinkedIn",
            Channel::Phone => "Phone",
            Channel::Location => "Location",
        }
    }

    pub fn glyph(&self) -> Glyph {
        match self {
            Channel::Email => Glyph::Mail,
            Channel::LinkedIn => Glyph::Linkedin,
            Channel::Phone => Glyph::Phone,
            Channel::Location => Glyph::MapPin,
        }
    }

    /// Gradient and glow of the card's icon badge.
    pub fn accent(&self) -> &'static str {
        match self {
            Channel::Email => "from-neon-cyan to-neon-blue glow-cyan",
            Channel::LinkedIn => "from-neon-purple to-neon-pink glow-purple",
            Channel::Phone => "from-neon-blue to-neon-cyan glow-cyan",
            Channel::Location => "from-neon-pink to-neon-purple glow-purple",
        }
    }
}

/// The site content, parsed once per process.
pub fn portfolio() -> Result<&'static Portfolio, ContentError> {
    PORTFOLIO.as_ref().map_err(Clone::clone)
}

fn load() -> Result<Portfolio, ContentError> {
    let file = Assets::get(PORTFOLIO_FILE).ok_or(ContentError::Missing(PORTFOLIO_FILE))?;
    let portfolio = parse(&file.data)?;
    log::debug!(
        "loaded {} projects and {} skill groups",
        portfolio.projects.len(),
        portfolio.skills.len()
    );
    Ok(portfolio)
}

fn parse(data: &[u8]) -> Result<Portfolio, ContentError> {
    let portfolio: Portfolio =
        serde_json::from_slice(data).map_err(|e| ContentError::Parse {
            file: PORTFOLIO_FILE,
            message: e.to_string(),
        })?;
    let mut seen = HashSet::new();
    for p in &portfolio.projects {
        if !seen.insert(p.title.as_str()) {
            return Err(ContentError::DuplicateTitle(p.title.clone()));
        }
    }
    Ok(portfolio)
}

/// Year the site was built, for the footer.
pub fn build_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.year())
        .unwrap_or_else(|_| Utc::now().year())
}
