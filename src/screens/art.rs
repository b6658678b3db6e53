#[rustfmt::skip]
pub(super) static TITLE: &[&str] = &[
    "░██████╗███╗░░██╗░█████╗░██╗░░██╗███████╗",
    "██╔════╝████╗░██║██╔══██╗██║░██╔╝██╔════╝",
    "╚█████╗░██╔██╗██║███████║█████═╝░█████╗░░",
    "░╚═══██╗██║╚████║██╔══██║██╔═██╗░██╔══╝░░",
    "██████╔╝██║░╚███║██║░░██║██║░╚██╗███████╗",
    "╚═════╝░╚═╝░░╚══╝╚═╝░░╚═╝╚═╝░░╚═╝╚══════╝",
];

#[rustfmt::skip]
pub(super) static TROPHY: &[&str] = &[
     "  _______",
     " |       |",
     "(|       |)",
     " |       |",
    r"  \     /",
     "   `---'",
     "   _|_|_",
];
