//! Hardcoded sample data returned by the mock pipeline

use crate::types::{Category, GossipItem};

pub const SERVICE_NAME: &str = "podcast-automation";
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const ENVIRONMENT: &str = "development";

/// Stand-in for a real scrape of celebrity news outlets
pub const GOSSIPS: [GossipItem; 3] = [
    GossipItem {
        title: "Anitta revela novo relacionamento em entrevista exclusiva",
        content: "A cantora confirmou romance com empresário durante programa de TV",
        celebrity: "Anitta",
        category: Category::Relacionamento,
        score: 8.5,
        source: "UOL Splash",
        url: "https://splash.uol.com.br/fake-news-1",
    },
    GossipItem {
        title: "Bruna Marquezine é vista em jantar romântico",
        content: "Atriz foi fotografada em restaurante exclusivo de São Paulo",
        celebrity: "Bruna Marquezine",
        category: Category::Relacionamento,
        score: 7.8,
        source: "CARAS",
        url: "https://caras.uol.com.br/fake-news-2",
    },
    GossipItem {
        title: "Xuxa anuncia novo projeto na televisão",
        content: "Apresentadora retorna com programa infantil em nova emissora",
        celebrity: "Xuxa",
        category: Category::Carreira,
        score: 7.2,
        source: "F5",
        url: "https://f5.folha.uol.com.br/fake-news-3",
    },
];

pub mod script {
    pub const INTRO: &str = "Olá pessoal! Bem-vindos ao nosso podcast de fofocas! Eu sou a Jennifer e comigo está o David. Hoje temos histórias incríveis para vocês!";
    pub const OUTRO: &str =
        "E por hoje é só pessoal! Não esqueçam de se inscrever e ativar o sininho!";

    /// Used in the opening line when no gossip was supplied
    pub const FALLBACK_SUBJECT: &str = "as celebridades";
    pub const REACTION: &str = "Que história interessante! E vocês sabiam que...";

    pub const JENNIFER_GREETING: &str = "Olá pessoal! Bem-vindos ao nosso podcast de fofocas!";
    pub const DAVID_GREETING: &str = "Oi gente! Hoje temos histórias incríveis!";

    pub const OPENING_DURATION: u32 = 90;
    pub const REACTION_DURATION: u32 = 120;
}

pub mod cover {
    pub const DEFAULT_THEME: &str = "Fofocas do Dia";
    pub const STYLE: &str = "modern_podcast";
    pub const COLORS: [&str; 3] = ["#FF6B9D", "#4ECDC4", "#45B7D1"];
    pub const ELEMENTS: [&str; 3] = ["microphone", "sparkles", "celebrity_silhouette"];
    pub const FORMAT: &str = "PNG";
    pub const DIMENSIONS: &str = "1400x1400";
    pub const SIZE_MB: f64 = 2.1;
}

pub mod audio {
    pub const DURATION_SECONDS: u32 = 360;
    pub const FORMAT: &str = "MP3";
    pub const QUALITY: &str = "high";
    pub const SAMPLE_RATE: &str = "44.1kHz";
    pub const SIZE_MB: f64 = 8.5;
}

pub mod video {
    pub const FORMAT: &str = "MP4";
    pub const FPS: u32 = 30;
    pub const SIZE_MB: f64 = 15.2;
}
