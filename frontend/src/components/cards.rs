use leptos::*;

#[component]
pub fn StatCard(
    #[prop(into)] title: String,
    #[prop(into)] value: String,
    #[prop(into)] subtext: String,
    #[prop(optional)] no_arrow: bool,
) -> impl IntoView {
    view! {
        <div class="group bg-surface-elevated hover:bg-action-primary-bg transition-all duration-300 p-6 md:p-8 rounded-[2rem] border border-border shadow-sm flex flex-col justify-between min-h-[180px]">
            <p class="text-fg group-hover:text-action-primary-text font-bold text-base md:text-lg">{title}</p>
            <h2 class="text-4xl md:text-5xl font-bold text-fg group-hover:text-action-primary-text">{value}</h2>
            <div class="flex items-center gap-2">
                {(!no_arrow).then(|| view! { <span class="text-status-success-text" aria-hidden="true">"↗"</span> })}
                <p class="text-fg-muted group-hover:text-action-primary-text text-xs md:text-sm">{subtext}</p>
            </div>
        </div>
    }
}

#[component]
pub fn MiniStat(#[prop(into)] label: String, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated p-6 rounded-[2rem] border border-border flex flex-col gap-1 shadow-sm">
            <p class="text-fg-muted text-xs font-bold uppercase tracking-wider">{label}</p>
            <p class="text-2xl font-bold text-fg">{value}</p>
        </div>
    }
}

#[component]
pub fn StatusPill(#[prop(into)] status: String) -> impl IntoView {
    let class = if status.eq_ignore_ascii_case("active") {
        "px-3 py-1 rounded-full text-[10px] font-bold uppercase tracking-wider bg-status-success-bg text-status-success-text"
    } else {
        "px-3 py-1 rounded-full text-[10px] font-bold uppercase tracking-wider bg-status-warning-bg text-status-warning-text"
    };
    view! { <span class=class>{status}</span> }
}
