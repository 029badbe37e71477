use crate::components::layout::ErrorMessage;
use leptos::{ev::SubmitEvent, *};
use web_sys::HtmlInputElement;

#[component]
pub fn LoginForm(
    email: Signal<String>,
    password: Signal<String>,
    error: Signal<Option<String>>,
    pending: Signal<bool>,
    on_email_input: Callback<String>,
    on_password_input: Callback<String>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface flex items-center justify-center p-4">
            <div class="max-w-md w-full bg-surface-elevated rounded-3xl shadow-xl p-8 md:p-12">
                <div class="text-center mb-10">
                    <h1 class="text-3xl font-bold text-fg mb-2">"Welcome Back"</h1>
                    <p class="text-fg-muted">"Please enter your details to sign in"</p>
                </div>
                <form class="space-y-6" on:submit=move |ev| on_submit.call(ev)>
                    <div>
                        <label for="email" class="block text-sm font-semibold text-fg mb-2">"Email Address"</label>
                        <input
                            id="email"
                            name="email"
                            type="email"
                            required
                            autocomplete="username"
                            placeholder="name@company.com"
                            class="w-full px-4 py-3 rounded-xl border border-border outline-none focus:ring-2 focus:ring-action-primary-bg transition-all"
                            prop:value=email
                            on:input=move |ev| {
                                let target = event_target::<HtmlInputElement>(&ev);
                                on_email_input.call(target.value());
                            }
                        />
                    </div>
                    <div>
                        <label for="password" class="block text-sm font-semibold text-fg mb-2">"Password"</label>
                        <input
                            id="password"
                            name="password"
                            type="password"
                            required
                            autocomplete="current-password"
                            placeholder="••••••••"
                            class="w-full px-4 py-3 rounded-xl border border-border outline-none focus:ring-2 focus:ring-action-primary-bg transition-all"
                            prop:value=password
                            on:input=move |ev| {
                                let target = event_target::<HtmlInputElement>(&ev);
                                on_password_input.call(target.value());
                            }
                        />
                    </div>
                    {move || error.get().map(|message| view! { <ErrorMessage message=message/> })}
                    <button
                        type="submit"
                        class="w-full bg-action-primary-bg text-action-primary-text font-semibold py-3 rounded-xl shadow-lg transition-all active:scale-[0.98]"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="text-center text-fg-muted mt-8 text-sm">
                    "Don't have an account? "
                    <span class="text-action-primary-bg font-semibold">"Contact Admin"</span>
                </p>
            </div>
        </div>
    }
}
