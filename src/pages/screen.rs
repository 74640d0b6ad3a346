use log::debug;
use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::paywall_sheet::PaywallSheet;

/// Mock "analysis complete" app page with the paywall sheet on top of it.
#[function_component(Screen)]
pub fn screen() -> Html {
    let sheet_visible = use_state(|| true);

    let dismiss = {
        let sheet_visible = sheet_visible.clone();
        Callback::from(move |_: ()| {
            debug!("paywall dismissed");
            sheet_visible.set(false);
        })
    };

    let reopen = {
        let sheet_visible = sheet_visible.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            debug!("paywall reopened");
            sheet_visible.set(true);
        })
    };

    html! {
        <div class="screen">
            <style>{SCREEN_CSS}</style>
            <div class="screen-device">
                <header class="screen-header">
                    <div class="screen-logo">
                        <div class="screen-logo-mark">
                            <Icon kind={IconKind::Activity} size={20} />
                        </div>
                        <span class="screen-logo-text">{"MediBoard AI"}</span>
                    </div>
                    <div class="screen-header-actions">
                        <Icon kind={IconKind::Bell} />
                        <Icon kind={IconKind::Menu} />
                    </div>
                </header>

                <main class={classes!("screen-content", (*sheet_visible).then(|| "obscured"))}>
                    <div class="skeleton hero"></div>
                    <div class="skeleton-row">
                        <div class="skeleton tile"></div>
                        <div class="skeleton tile"></div>
                    </div>
                    <div class="skeleton-lines">
                        <div class="skeleton line" style="width: 75%;"></div>
                        <div class="skeleton line" style="width: 50%;"></div>
                        <div class="skeleton line" style="width: 100%;"></div>
                    </div>
                </main>

                {
                    if !*sheet_visible {
                        html! {
                            <div class="reopen-dock">
                                <button class="reopen-button" onclick={reopen}>
                                    {"View Results"}
                                </button>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>

            {
                if *sheet_visible {
                    html! { <PaywallSheet on_close={dismiss} /> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

const SCREEN_CSS: &str = r#"
    @keyframes pulse {
        0%, 100% { opacity: 1; }
        50% { opacity: 0.5; }
    }
    body {
        margin: 0;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    .screen {
        position: relative;
        min-height: 100vh;
        background: #f8fafc;
        overflow: hidden;
        display: flex;
        justify-content: center;
    }
    .screen-device {
        position: relative;
        width: 100%;
        max-width: 28rem;
        min-height: 100vh;
        background: #fff;
        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
        display: flex;
        flex-direction: column;
    }
    .screen-header {
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 1.5rem;
        border-bottom: 1px solid #f1f5f9;
    }
    .screen-logo { display: flex; align-items: center; gap: 0.5rem; }
    .screen-logo-mark {
        width: 2rem;
        height: 2rem;
        border-radius: 0.5rem;
        background: #0d9488;
        color: #fff;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .screen-logo-text { font-weight: 700; font-size: 1.125rem; color: #1e293b; }
    .screen-header-actions { display: flex; gap: 1rem; color: #94a3b8; }
    .screen-content {
        flex: 1;
        padding: 1.5rem;
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
        transition: all 0.5s;
    }
    .screen-content.obscured { filter: blur(4px); opacity: 0.5; }
    .skeleton { background: #f1f5f9; animation: pulse 2s infinite; }
    .skeleton.hero { height: 12rem; border-radius: 1rem; }
    .skeleton-row { display: flex; gap: 1rem; }
    .skeleton.tile { flex: 1; height: 8rem; border-radius: 1rem; }
    .skeleton-lines { display: flex; flex-direction: column; gap: 0.75rem; }
    .skeleton.line { height: 1rem; border-radius: 0.25rem; }
    .reopen-dock {
        position: absolute;
        bottom: 1.5rem;
        left: 0;
        right: 0;
        padding: 0 1.5rem;
    }
    .reopen-button {
        width: 100%;
        padding: 1rem 0;
        border: none;
        border-radius: 0.75rem;
        background: #0d9488;
        color: #fff;
        font-weight: 700;
        box-shadow: 0 10px 15px -3px rgba(13, 148, 136, 0.3);
        cursor: pointer;
        transition: transform 0.15s;
    }
    .reopen-button:active { transform: scale(0.95); }
"#;
