//! Static page copy: navigation, practice areas, team, testimonials, contact.

use crate::config::ContactChannels;
use crate::motion::SectionId;

pub const FIRM_NAME: &str = "P & B - Advogados Associados";
pub const FOUNDED_YEAR: &str = "2014";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub section: SectionId,
}

/// Links shown inline in the navbar.
pub const PRIMARY_LINKS: [NavLink; 4] = [
    NavLink { label: "Início", section: SectionId::Hero },
    NavLink { label: "O Escritório", section: SectionId::About },
    NavLink { label: "Áreas de Atuação", section: SectionId::PracticeAreas },
    NavLink { label: "Equipe", section: SectionId::Team },
];

/// Links grouped under the "Mais" dropdown.
pub const DROPDOWN_LINKS: [NavLink; 2] = [
    NavLink { label: "Depoimentos", section: SectionId::Testimonials },
    NavLink { label: "Contato", section: SectionId::Contact },
];

/// Every section, used by the footer.
pub fn footer_links() -> impl Iterator<Item = NavLink> {
    PRIMARY_LINKS.into_iter().chain(DROPDOWN_LINKS)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const HERO_STATS: [Stat; 3] = [
    Stat { value: "500+", label: "Causas Resolvidas" },
    Stat { value: "12+", label: "Anos de Atuação" },
    Stat { value: "98%", label: "Clientes Satisfeitos" },
];

pub const ABOUT_DIFFERENTIALS: [&str; 4] = [
    "Atuação exclusiva em Direito Cível, Trabalhista e Criminal",
    "Estratégias personalizadas para cada caso",
    "Acompanhamento próximo em todas as etapas",
    "Histórico comprovado de resultados favoráveis",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PracticeAreaCard {
    pub icon: &'static str,
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub services: &'static [&'static str],
}

pub const PRACTICE_AREAS: [PracticeAreaCard; 3] = [
    PracticeAreaCard {
        icon: "⚖",
        number: "01",
        title: "Direito Cível",
        description: "Atuação completa em questões cíveis, incluindo contratos, responsabilidade civil, direito de família, sucessões e elaboração de contratos.",
        services: &[
            "Inventários e Partilhas",
            "Divórcio",
            "Usucapião",
            "Reintegração de Posse",
            "Responsabilidade Civil",
            "Danos Morais",
        ],
    },
    PracticeAreaCard {
        icon: "💼",
        number: "02",
        title: "Direito Trabalhista",
        description: "Defesa dos direitos trabalhistas, representando tanto empregados quanto empregadores em todas as instâncias judiciais.",
        services: &[
            "Reclamações trabalhistas",
            "Acidentes de trabalho",
            "Rescisões contratuais",
            "Direitos do trabalhador",
            "Consultoria preventiva",
        ],
    },
    PracticeAreaCard {
        icon: "🔨",
        number: "03",
        title: "Direito Criminal",
        description: "Atuação estratégica na defesa criminal, desde a fase investigatória até os tribunais superiores.",
        services: &[
            "Defesa criminal em geral",
            "Habeas corpus",
            "Audiência de custódia",
            "Crimes contra a pessoa",
            "Crimes patrimoniais",
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub registration: &'static str,
    pub image: &'static str,
    pub specialties: &'static [&'static str],
    pub qualifications: &'static [&'static str],
    pub description: &'static str,
}

pub const TEAM: [TeamMember; 1] = [TeamMember {
    name: "Carlos Eduardo P. de Brito",
    role: "Advogado Sênior, Escritor e Palestrante",
    registration: "OAB/DF 44.005 e OAB/GO 41.166",
    image: "/IMG-20180413-WA0044-1.jpg",
    specialties: &["Direito Cível", "Trabalhista", "Criminal", "Inventários", "Divórcio"],
    qualifications: &[
        "Pós-Graduação em Direito e Processo Penal",
        "Especialista em Neuropsicologia",
        "Especialista em Psicanálise",
    ],
    description: "Experiência de excelência desde 2014. Escritor e Palestrante, o Dr. Carlos atua em conjunto com parceiros especializados nas áreas Trabalhista, Criminal e Cível, com foco em resultados estratégicos e humanizados.",
}];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Credential {
    pub icon: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

pub const TEAM_CREDENTIALS: [Credential; 2] = [
    Credential {
        icon: "🏅",
        title: "Inscrição Regular",
        text: "Advogado plenamente habilitado e regular perante a OAB/DF e OAB/GO.",
    },
    Credential {
        icon: "📖",
        title: "Especialização Técnica",
        text: "Formação sólida e contínua para resultados de alta complexidade.",
    },
];

/// A testimonial video: 11-character YouTube id plus caption.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VideoEmbed {
    pub id: &'static str,
    pub title: &'static str,
}

impl VideoEmbed {
    pub fn embed_url(&self) -> String {
        format!("https://www.youtube.com/embed/{}", urlencoding::encode(self.id))
    }
}

pub const TESTIMONIAL_VIDEOS: [VideoEmbed; 7] = [
    VideoEmbed { id: "-nl13zI0yNM", title: "Depoimento de Cliente" },
    VideoEmbed { id: "8CDSFowRCzg", title: "Experiência Positiva" },
    VideoEmbed { id: "DAm7Z5oDW8U", title: "Sucesso Jurídico" },
    VideoEmbed { id: "A8Ur0bGH8nM", title: "Atendimento de Excelência" },
    VideoEmbed { id: "oOHxY2UvwvA", title: "Reconhecimento Profissional" },
    VideoEmbed { id: "ZkvCSOsg1AM", title: "Confiança e Resultados" },
    VideoEmbed { id: "Fqby6Cr1zHQ", title: "Comprometimento" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    WhatsApp,
    Telegram,
    Email,
    Coverage,
}

impl ChannelKind {
    pub fn icon(self) -> &'static str {
        match self {
            ChannelKind::WhatsApp => "☎",
            ChannelKind::Telegram => "➤",
            ChannelKind::Email => "✉",
            ChannelKind::Coverage => "⌖",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactCard {
    pub kind: ChannelKind,
    pub label: &'static str,
    pub value: String,
    pub href: String,
}

impl ContactCard {
    /// External links open in a new tab.
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http")
    }
}

pub fn contact_cards(channels: &ContactChannels) -> Vec<ContactCard> {
    vec![
        ContactCard {
            kind: ChannelKind::WhatsApp,
            label: "WhatsApp",
            value: "(61) 99387-3267".to_string(),
            href: channels.whatsapp_url(),
        },
        ContactCard {
            kind: ChannelKind::Telegram,
            label: "Telegram",
            value: format!("@{}", channels.telegram_handle),
            href: channels.telegram_url(),
        },
        ContactCard {
            kind: ChannelKind::Email,
            label: "E-mail",
            value: channels.email.clone(),
            href: channels.mailto_url(),
        },
        ContactCard {
            kind: ChannelKind::Coverage,
            label: "Atendimento",
            value: "Brasília e Todo o Brasil".to_string(),
            href: "#".to_string(),
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BusinessHours {
    pub days: &'static str,
    pub hours: &'static str,
}

pub const BUSINESS_HOURS: [BusinessHours; 2] = [
    BusinessHours { days: "Segunda - Quinta", hours: "09:00 - 18:00" },
    BusinessHours { days: "Sexta", hours: "09:00 - 17:00" },
];

/// Transition delay for the `index`th item of a staggered list.
pub fn stagger_ms(base: u64, step: u64, index: usize) -> u64 {
    base + step * index as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{extract_video_ids, PatternSet, VIDEO_ID_LEN};

    #[test]
    fn test_footer_covers_every_section_once() {
        let sections: Vec<SectionId> = footer_links().map(|link| link.section).collect();
        assert_eq!(sections, SectionId::ALL.to_vec());
    }

    #[test]
    fn test_testimonial_ids_have_video_shape() {
        for video in TESTIMONIAL_VIDEOS {
            assert_eq!(video.id.len(), VIDEO_ID_LEN, "{}", video.title);
        }
    }

    #[test]
    fn test_embed_urls_round_trip_through_extractor() {
        let page: String = TESTIMONIAL_VIDEOS
            .iter()
            .map(|video| format!("<iframe src=\"{}\"></iframe>\n", video.embed_url()))
            .collect();
        let ids = extract_video_ids(&page, PatternSet::Separate);
        let expected: Vec<&str> = TESTIMONIAL_VIDEOS.iter().map(|v| v.id).collect();
        let found: Vec<&str> = ids.iter().map(|id| id.as_str()).collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_contact_cards_follow_channels() {
        let cards = contact_cards(&ContactChannels::default());
        assert_eq!(cards.len(), 4);
        assert!(cards[0].is_external());
        assert_eq!(cards[1].value, "@Brain_590");
        assert!(!cards[2].is_external());
        assert_eq!(cards[3].href, "#");
    }

    #[test]
    fn test_stagger() {
        assert_eq!(stagger_ms(200, 150, 0), 200);
        assert_eq!(stagger_ms(200, 150, 2), 500);
    }
}
