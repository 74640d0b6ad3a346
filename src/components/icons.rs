use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum IconKind {
    Activity,
    Bell,
    Menu,
    Check,
    ShieldCheck,
    Lock,
    ChevronRight,
    Close,
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub kind: IconKind,
    #[prop_or(24)]
    pub size: u32,
    #[prop_or(2.0)]
    pub stroke_width: f32,
    #[prop_or_default]
    pub class: Classes,
}

fn strokes(kind: IconKind) -> Html {
    match kind {
        IconKind::Activity => html! { <path d="M22 12h-4l-3 9L9 3l-3 9H2" /> },
        IconKind::Bell => html! {
            <>
                <path d="M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9" />
                <path d="M10.3 21a1.94 1.94 0 0 0 3.4 0" />
            </>
        },
        IconKind::Menu => html! {
            <>
                <line x1="4" x2="20" y1="12" y2="12" />
                <line x1="4" x2="20" y1="6" y2="6" />
                <line x1="4" x2="20" y1="18" y2="18" />
            </>
        },
        IconKind::Check => html! { <path d="M20 6 9 17l-5-5" /> },
        IconKind::ShieldCheck => html! {
            <>
                <path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10" />
                <path d="m9 12 2 2 4-4" />
            </>
        },
        IconKind::Lock => html! {
            <>
                <rect width="18" height="11" x="3" y="11" rx="2" ry="2" />
                <path d="M7 11V7a5 5 0 0 1 10 0v4" />
            </>
        },
        IconKind::ChevronRight => html! { <path d="m9 18 6-6-6-6" /> },
        IconKind::Close => html! {
            <>
                <path d="M18 6 6 18" />
                <path d="m6 6 12 12" />
            </>
        },
    }
}

/// Line icon drawn with the current text color.
#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let size = props.size.to_string();

    html! {
        <svg
            class={classes!("icon", props.class.clone())}
            xmlns="http://www.w3.org/2000/svg"
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width={props.stroke_width.to_string()}
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { strokes(props.kind) }
        </svg>
    }
}
