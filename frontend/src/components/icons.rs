//! 线框图标组件 (lucide 风格)

use leptos::prelude::*;

macro_rules! icon {
    ($name:ident, $($d:literal),+) => {
        #[component]
        pub fn $name(#[prop(into, optional)] class: String) -> impl IntoView {
            view! {
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    class=class
                >
                    $(<path d=$d />)+
                </svg>
            }
        }
    };
}

icon!(
    ShieldCheck,
    "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1 1 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z",
    "m9 12 2 2 4-4"
);

icon!(
    Truck,
    "M14 18V6a2 2 0 0 0-2-2H4a2 2 0 0 0-2 2v11a1 1 0 0 0 1 1h2",
    "M15 18h-5",
    "M19 18h2a1 1 0 0 0 1-1v-3.65a1 1 0 0 0-.22-.62l-3.48-4.35a1 1 0 0 0-.78-.38H14",
    "M17 20a2 2 0 1 0 0-4 2 2 0 0 0 0 4z",
    "M7 20a2 2 0 1 0 0-4 2 2 0 0 0 0 4z"
);

icon!(
    CalendarDays,
    "M8 2v4",
    "M16 2v4",
    "M21 8.5V6a2 2 0 0 0-2-2H5a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V8.5z",
    "M3 10h18"
);

icon!(
    LifeBuoy,
    "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z",
    "M12 16a4 4 0 1 0 0-8 4 4 0 0 0 0 8z",
    "m4.93 4.93 4.24 4.24",
    "m14.83 14.83 4.24 4.24",
    "m14.83 9.17 4.24-4.24",
    "m4.93 19.07 4.24-4.24"
);

icon!(
    Newspaper,
    "M4 22h16a2 2 0 0 0 2-2V4a2 2 0 0 0-2-2H8a2 2 0 0 0-2 2v16a2 2 0 0 1-4 0V9",
    "M18 14h-8",
    "M15 18h-5",
    "M10 6h8v4h-8z"
);

icon!(
    UserRound,
    "M12 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z",
    "M20 21a8 8 0 0 0-16 0"
);

icon!(
    LogOut,
    "M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4",
    "m16 17 5-5-5-5",
    "M21 12H9"
);

icon!(Plus, "M5 12h14", "M12 5v14");

icon!(
    Pencil,
    "M21.17 6.83a2.85 2.85 0 1 0-4-4L3.84 16.17a2 2 0 0 0-.5.83l-1.32 4.35a.5.5 0 0 0 .62.62l4.35-1.32a2 2 0 0 0 .83-.5z",
    "m15 5 4 4"
);

icon!(
    Trash2,
    "M3 6h18",
    "M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6",
    "M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2",
    "M10 11v6",
    "M14 11v6"
);

icon!(
    FileText,
    "M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7z",
    "M14 2v4a2 2 0 0 0 2 2h4",
    "M10 9H8",
    "M16 13H8",
    "M16 17H8"
);

icon!(
    CircleHelp,
    "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z",
    "M9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3",
    "M12 17h.01"
);

icon!(
    Paperclip,
    "m16 6-8.41 8.41a2 2 0 0 0 2.83 2.83l8.41-8.41a4 4 0 0 0-5.66-5.66l-8.41 8.4a6 6 0 0 0 8.49 8.49L21 12"
);
