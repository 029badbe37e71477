use crate::{
    api::Product,
    pages::products::utils::{category_icon, is_best_seller, Cart},
    utils::format::{format_count, format_currency},
};
use leptos::*;

#[component]
fn CartBadge(cart: RwSignal<Cart>) -> impl IntoView {
    let count = move || cart.with(Cart::len);
    view! {
        <div class="bg-surface-elevated px-6 py-3 rounded-2xl border border-border shadow-sm flex items-center gap-3" data-testid="cart">
            <i class="fas fa-cart-shopping text-fg"></i>
            <span class="font-bold text-sm text-fg">{move || format!("{} Items", count())}</span>
        </div>
    }
}

#[component]
fn ProductCard(product: Product, cart: RwSignal<Cart>) -> impl IntoView {
    let id = product.id.clone();
    let in_cart = {
        let id = id.clone();
        move || cart.with(|c| c.contains(&id))
    };
    let on_toggle = move |_| cart.update(|c| c.toggle(&id));
    let best_seller = is_best_seller(&product);
    let in_cart_label = in_cart.clone();

    view! {
        <article class="bg-surface-elevated p-6 rounded-[2rem] border border-border shadow-sm flex flex-col h-full">
            <div class="flex justify-between items-start mb-6">
                <div class="p-4 rounded-2xl bg-surface-muted text-fg">
                    <i class=format!("fas {}", category_icon(&product.category))></i>
                </div>
                {best_seller.then(|| view! {
                    <span class="bg-status-warning-bg text-status-warning-text text-[10px] font-bold px-3 py-1 rounded-full uppercase tracking-widest">
                        "Best Seller"
                    </span>
                })}
            </div>
            <div class="flex-grow">
                <h3 class="text-xl font-bold text-fg mb-1">{product.name.clone()}</h3>
                <p class="text-[10px] text-fg-muted uppercase font-bold tracking-widest mb-4">{product.category.clone()}</p>
                <div class="flex items-baseline gap-1 mb-2">
                    <span class="text-3xl font-bold text-fg">{format_currency(product.price)}</span>
                    <span class="text-xs text-fg-muted font-medium">"/one-time"</span>
                </div>
                <p class="text-xs text-fg-muted mb-6">{format!("{} Sales", format_count(product.sales))}</p>
            </div>
            <button
                type="button"
                class=move || {
                    if in_cart() {
                        "w-full py-4 rounded-2xl font-bold text-sm bg-status-error-bg text-status-error-text border border-status-error-border"
                    } else {
                        "w-full py-4 rounded-2xl font-bold text-sm bg-action-primary-bg text-action-primary-text shadow-lg"
                    }
                }
                on:click=on_toggle
            >
                {move || if in_cart_label() { "Remove Option" } else { "Add to Cart" }}
            </button>
        </article>
    }
}

#[component]
pub fn ProductsView(products: Vec<Product>, cart: RwSignal<Cart>) -> impl IntoView {
    let cards = products
        .into_iter()
        .map(|product| view! { <ProductCard product=product cart=cart/> })
        .collect_view();

    view! {
        <div class="space-y-8">
            <div class="flex justify-between items-end">
                <div>
                    <h1 class="text-3xl font-medium text-fg">"Product Catalog"</h1>
                    <p class="text-fg-muted text-sm mt-1">"Select a plan to power your workflow"</p>
                </div>
                <CartBadge cart=cart/>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">{cards}</div>
        </div>
    }
}
