use dioxus::prelude::*;

// stroke icons, 24x24 viewbox
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    Menu,
    Close,
    ChevronDown,
    Phone,
    Calculator,
}

impl Glyph {
    fn path(self) -> &'static str {
        match self {
            Glyph::Menu => "M4 6h16M4 12h16M4 18h16",
            Glyph::Close => "M18 6 6 18M6 6l12 12",
            Glyph::ChevronDown => "m6 9 6 6 6-6",
            Glyph::Phone => {
                "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"
            }
            Glyph::Calculator => {
                "M6 2h12a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2zM8 6h8M16 14v4M16 10h.01M12 10h.01M8 10h.01M12 14h.01M8 14h.01M12 18h.01M8 18h.01"
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct IconProps {
    glyph: Glyph,
    #[props(default = 16)]
    size: u32,
    #[props(default, into)]
    class: String,
}

#[component]
pub fn Icon(props: IconProps) -> Element {
    let d = props.glyph.path();
    let size = props.size;

    rsx! {
        svg {
            class: "{props.class}",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "{d}" }
        }
    }
}
