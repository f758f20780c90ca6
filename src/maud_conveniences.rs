use maud::{Markup, Render, html};

pub fn render_nav() -> Markup {
    html! {
        nav class="w-full bg-gray-800 shadow-md" {
            div class="container mx-auto flex flex-row items-center justify-between px-8 py-4" {
                a href="/" class="text-xl font-bold hover:text-blue-300" {"Roster"}
                div class="flex flex-row space-x-4" {
                    a href="/" class="hover:text-blue-300" {"All Students"}
                    a href="/add" class="hover:text-blue-300" {"Add Student"}
                }
            }
        }
    }
}

pub fn table<const N: usize>(titles: [&'static str; N], items: Vec<[Markup; N]>) -> Markup {
    html! {
        div class="overflow-x-auto" {
            table class="min-w-full bg-gray-800 rounded shadow-md" {
                thead class="bg-gray-700" {
                    tr {
                        @for title in titles {
                            th class="py-2 px-4 text-left font-semibold text-gray-300" {(title)}
                        }
                    }
                }
                tbody {
                    @for row in items {
                        tr {
                            @for col in row {
                                td class="py-2 px-4 border-b border-gray-600 text-gray-200" {(col)}
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn title(s: impl Render) -> Markup {
    html! {
        h1 class="text-2xl font-semibold mb-4" {(s)}
    }
}

pub fn simple_form_element(
    id: &'static str,
    label: &'static str,
    required: bool,
    ty: Option<&'static str>,
    value: Option<&str>,
) -> Markup {
    html! {
        div class="mb-4" {
            label for=(id) class="block text-sm font-bold mb-2 text-gray-300" {(label)}
            input required[required] type=(ty.unwrap_or("text")) id=(id) name=(id) value=[value] class="shadow appearance-none border rounded w-full py-2 px-3 leading-tight focus:outline-none focus:shadow-outline bg-gray-700 border-gray-600";
        }
    }
}

pub fn form_submit_button(text: Option<&str>) -> Markup {
    html! {
        div class="flex items-center justify-between" {
            button type="submit" class="bg-blue-500 hover:bg-blue-700 font-bold py-2 px-4 rounded focus:outline-none focus:shadow-outline" {
                (text.unwrap_or("Submit"))
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum ButtonColour {
    Blue,
    Teal,
    Amber,
    Red,
}

impl ButtonColour {
    pub const fn classes(self) -> &'static str {
        match self {
            Self::Blue => "bg-blue-600 hover:bg-blue-800",
            Self::Teal => "bg-teal-600 hover:bg-teal-800",
            Self::Amber => "bg-amber-600 hover:bg-amber-800",
            Self::Red => "bg-red-600 hover:bg-red-800",
        }
    }
}

pub fn link_button(href: impl Render, text: &'static str, colour: ButtonColour) -> Markup {
    html! {
        a href=(href) class={(colour.classes()) " font-bold py-2 px-4 rounded mr-2"} {(text)}
    }
}
