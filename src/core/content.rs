//! Static content of the landing page
//!
//! Everything the sections render is defined here as compile-time data:
//! external links, navigation entries, pillar and benefit records and the
//! QR code request for the recruitment form.

use std::fmt;

/// Membership application form
pub const FORM_LINK: &str = "https://docs.google.com/forms/d/e/1FAIpQLSeZ2UmdlfKeoKIElbvRXzWoC8SapTFqyOMcanWqU1w_XmAIRA/viewform?usp=header";

/// Instagram profile of the league
pub const INSTAGRAM_LINK: &str = "https://www.instagram.com/laftecuninassau?utm_source=ig_web_button_share_sheet&igsh=ZDNlZDc0MzIxNw==";

/// Recruitment rules document (edital)
pub const EDITAL_LINK: &str =
    "https://drive.google.com/file/d/1QksH8xoE1tSWz-cJkPW2XTAVMSDPyHJk/view?usp=sharing";

/// Host of the QR code image generation service
pub const QR_SERVICE_URL: &str = "https://api.qrserver.com/v1/create-qr-code/";

pub const BRAND_NAME: &str = "LAFTEC";
pub const BRAND_FULL_NAME: &str = "Liga Acadêmica Feminina de Tecnologia";
pub const APPLICATION_DEADLINE: &str = "Inscrições abertas até 03 de Março";
pub const SELECTION_CYCLE: &str = "2026.1";

/// In-page sections addressable by anchor navigation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    WhatWeDo,
    Benefits,
    Recruitment,
}

impl SectionId {
    /// All sections in page order
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::WhatWeDo,
        SectionId::Benefits,
        SectionId::Recruitment,
    ];

    /// DOM id of the section element
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "sobre",
            SectionId::WhatWeDo => "fazemos",
            SectionId::Benefits => "beneficios",
            SectionId::Recruitment => "inscricao",
        }
    }

    /// Anchor href pointing at this section (`#sobre`)
    pub fn href(&self) -> String {
        format!("#{}", self.as_str())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entry of the navigation bar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationLink {
    pub label: &'static str,
    pub target: SectionId,
}

/// Navigation entries in display order
pub const NAV_LINKS: [NavigationLink; 5] = [
    NavigationLink {
        label: "Início",
        target: SectionId::Home,
    },
    NavigationLink {
        label: "Sobre",
        target: SectionId::About,
    },
    NavigationLink {
        label: "Pilares",
        target: SectionId::WhatWeDo,
    },
    NavigationLink {
        label: "Benefícios",
        target: SectionId::Benefits,
    },
    NavigationLink {
        label: "Inscrição",
        target: SectionId::Recruitment,
    },
];

/// Icons used across the page (Lucide set)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconKind {
    ArrowRight,
    ArrowUpRight,
    Award,
    BrainCircuit,
    Code,
    Database,
    FileText,
    Globe,
    Instagram,
    Menu,
    Network,
    QrCode,
    Rocket,
    Sparkles,
    Terminal,
    Users,
    X,
}

/// A pillar or benefit card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContentItem {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: IconKind,
    pub tags: &'static [&'static str],
}

impl ContentItem {
    pub fn has_tags(&self) -> bool {
        !self.tags.is_empty()
    }
}

/// "O que fazemos" pillars
pub const PILLARS: [ContentItem; 3] = [
    ContentItem {
        title: "Ensino",
        description: "Aulas práticas de robótica, workshops técnicos e nivelamento de inglês para o mercado tech.",
        icon: IconKind::BrainCircuit,
        tags: &["Robótica", "Inglês", "Mentorias"],
    },
    ContentItem {
        title: "Extensão",
        description: "Projetos reais com dados, visitas técnicas a empresas (Tech Tours) e organização de eventos.",
        icon: IconKind::Database,
        tags: &["Data Science", "Networking", "Eventos"],
    },
    ContentItem {
        title: "Pesquisa",
        description: "Desenvolvimento de tecnologias assistivas e projetos com alto impacto social.",
        icon: IconKind::Globe,
        tags: &["Impacto Social", "Pesquisa UX", "Inovação"],
    },
];

/// "Por que participar?" benefits
pub const BENEFITS: [ContentItem; 5] = [
    ContentItem {
        title: "Comunidade e Apoio",
        description: "Ambiente acolhedor para tirar dúvidas e crescer juntas.",
        icon: IconKind::Users,
        tags: &[],
    },
    ContentItem {
        title: "Desenvolvimento Técnico",
        description: "Acesso a cursos e ferramentas exclusivas da liga.",
        icon: IconKind::Code,
        tags: &[],
    },
    ContentItem {
        title: "Experiência Curricular",
        description: "Certificados de extensão e projetos reais no portfólio.",
        icon: IconKind::Award,
        tags: &[],
    },
    ContentItem {
        title: "Networking Estratégico",
        description: "Contato direto com profissionais e empresas da área.",
        icon: IconKind::Network,
        tags: &[],
    },
    ContentItem {
        title: "Protagonismo Feminino",
        description: "Oportunidades reais de liderança e gestão de projetos.",
        icon: IconKind::Sparkles,
        tags: &[],
    },
];

/// Highlights listed next to the mission statement
pub const ABOUT_HIGHLIGHTS: [ContentItem; 2] = [
    ContentItem {
        title: "Nosso Propósito",
        description: "Garantir que cada mulher tenha as ferramentas para liderar na era digital.",
        icon: IconKind::Rocket,
        tags: &[],
    },
    ContentItem {
        title: "Nossa Comunidade",
        description: "Uma rede de apoio que vai muito além das salas de aula.",
        icon: IconKind::Users,
        tags: &[],
    },
];

/// Parameters of a QR code image request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QrCodeRequest {
    /// Edge length in pixels (images are square)
    pub size_px: u32,
    /// Payload encoded in the QR code
    pub data: String,
    /// Foreground color, hex without `#`
    pub color: &'static str,
    /// Background color, hex without `#`
    pub background: &'static str,
}

impl QrCodeRequest {
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            size_px: 100,
            data: data.into(),
            color: "facc15",
            background: "000000",
        }
    }

    /// QR code pointing at the application form, in the site palette
    pub fn for_form() -> Self {
        Self::new(FORM_LINK)
    }

    /// Image URL served by the QR generation service
    pub fn image_url(&self) -> String {
        format!(
            "{}?size={}x{}&data={}&color={}&bgcolor={}",
            QR_SERVICE_URL,
            self.size_px,
            self.size_px,
            urlencoding::encode(&self.data),
            self.color,
            self.background
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // SectionId
    // ========================================================================

    #[test]
    fn test_section_ids_match_page_anchors() {
        let ids: Vec<&str> = SectionId::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(ids, vec!["home", "sobre", "fazemos", "beneficios", "inscricao"]);
    }

    #[test]
    fn test_section_href() {
        assert_eq!(SectionId::Benefits.href(), "#beneficios");
        assert_eq!(SectionId::Home.to_string(), "home");
    }

    // ========================================================================
    // Navigation links
    // ========================================================================

    #[test]
    fn test_nav_links_follow_page_order() {
        let targets: Vec<SectionId> = NAV_LINKS.iter().map(|l| l.target).collect();
        assert_eq!(targets, SectionId::ALL.to_vec());
        assert_eq!(NAV_LINKS[2].label, "Pilares");
    }

    // ========================================================================
    // Content records
    // ========================================================================

    #[test]
    fn test_every_pillar_has_three_tags() {
        for pillar in PILLARS.iter() {
            assert!(pillar.has_tags(), "{} has no tags", pillar.title);
            assert_eq!(pillar.tags.len(), 3);
        }
    }

    #[test]
    fn test_benefits_have_no_tags() {
        assert_eq!(BENEFITS.len(), 5);
        assert!(BENEFITS.iter().all(|b| !b.has_tags()));
        assert_eq!(BENEFITS[2].title, "Experiência Curricular");
        assert_eq!(BENEFITS[4].icon, IconKind::Sparkles);
    }

    // ========================================================================
    // QR code
    // ========================================================================

    #[test]
    fn test_qr_code_url_for_form() {
        let url = QrCodeRequest::for_form().image_url();

        assert!(url.starts_with("https://api.qrserver.com/v1/create-qr-code/?size=100x100&data="));
        assert!(url.ends_with("&color=facc15&bgcolor=000000"));
        assert!(url.contains("https%3A%2F%2Fdocs.google.com%2Fforms%2F"));
        assert!(url.contains("viewform%3Fusp%3Dheader"));
    }

    #[test]
    fn test_qr_code_payload_is_fully_encoded() {
        let url = QrCodeRequest::new("a b&c=d").image_url();
        assert!(url.contains("data=a%20b%26c%3Dd&"));
    }
}
