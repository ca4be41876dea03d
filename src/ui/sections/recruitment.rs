use leptos::prelude::*;

use crate::core::{
    APPLICATION_DEADLINE, EDITAL_LINK, FORM_LINK, IconKind, QrCodeRequest, SELECTION_CYCLE,
    SectionId,
};
use crate::ui::common::{Badge, BadgeVariant, ExternalLink, LinkSize, LinkVariant};
use crate::ui::icon::Icon;

/// Call to action: QR code and form link next to the edital
#[component]
pub fn Recruitment() -> impl IntoView {
    view! {
        <section id=SectionId::Recruitment.as_str() class="py-24 bg-black relative overflow-hidden">
            <div class="absolute inset-0 bg-yellow-400/5 blur-[120px] rounded-full -translate-y-1/2"></div>
            <div class="container mx-auto px-6 relative z-10">
                <div class="bg-yellow-400 p-8 md:p-16 rounded-[60px] flex flex-col items-center text-center">
                    <Badge variant=BadgeVariant::OnAccent>{format!("Processo Seletivo {SELECTION_CYCLE}")}</Badge>
                    <h2 class="text-5xl md:text-7xl font-black text-black italic uppercase leading-[0.85] tracking-tighter mb-8">
                        "A Próxima Geração " <br /> "Começa com Você."
                    </h2>
                    <p class="text-black/70 text-base md:text-lg max-w-2xl font-bold mb-12">
                        "Sua trajetória na tecnologia começa aqui. Escaneie o QR Code ou clique no botão para garantir sua vaga."
                    </p>

                    <div class="grid md:grid-cols-2 gap-6 w-full max-w-4xl text-left items-stretch">
                        <ApplicationCard />
                        <EditalCard />
                    </div>

                    <div class="mt-12 flex items-center space-x-4 text-black/40 font-black uppercase text-[10px] tracking-[0.3em]">
                        <span class="w-12 h-[1px] bg-black/20"></span>
                        <span>{APPLICATION_DEADLINE}</span>
                        <span class="w-12 h-[1px] bg-black/20"></span>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ApplicationCard() -> impl IntoView {
    let qr_code_url = QrCodeRequest::for_form().image_url();

    view! {
        <div class="bg-black/10 backdrop-blur-md p-8 md:p-10 rounded-[40px] border border-black/10 flex flex-col items-center group hover:bg-black/20 transition-all">
            <h4 class="text-black font-black uppercase text-2xl mb-8 flex items-center space-x-2">
                <Icon kind=IconKind::QrCode />
                <span>"Inscrição"</span>
            </h4>

            <div class="flex flex-col items-center w-full space-y-8 flex-grow justify-center">
                <div class="bg-black p-2 rounded-xl shadow-lg border border-yellow-400/20">
                    <img src=qr_code_url alt="QR Code Inscrição" class="w-[80px] h-[80px] block" />
                </div>

                <ExternalLink href=FORM_LINK variant=LinkVariant::Dark size=LinkSize::Medium>
                    <span>"INSCREVA-SE AGORA"</span>
                    <Icon kind=IconKind::ArrowUpRight size=16 />
                </ExternalLink>
            </div>
        </div>
    }
}

#[component]
fn EditalCard() -> impl IntoView {
    view! {
        <div class="bg-black/10 backdrop-blur-md p-8 md:p-10 rounded-[40px] border border-black/10 flex flex-col justify-between">
            <div class="flex flex-col h-full">
                <h4 class="text-black font-black uppercase text-2xl mb-8 flex items-center space-x-2">
                    <Icon kind=IconKind::FileText />
                    <span>"O Edital"</span>
                </h4>
                <p class="text-black/70 font-bold mb-10 text-sm leading-relaxed flex-grow">
                    {format!(
                        "Consulte o documento oficial para entender todas as etapas do processo, prazos importantes e os requisitos para se tornar uma ligante da LAFTEC {SELECTION_CYCLE}."
                    )}
                </p>

                <ExternalLink href=EDITAL_LINK variant=LinkVariant::DarkMuted size=LinkSize::Medium>
                    <span>"ACESSAR EDITAL"</span>
                    <Icon kind=IconKind::ArrowUpRight size=18 />
                </ExternalLink>
            </div>
        </div>
    }
}
