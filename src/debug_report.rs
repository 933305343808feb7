use quilvyn_frontier::NicknameTrace;
use quilvyn_frontier::NameReport;
use quilvyn_frontier::names::NicknameStep;

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_nicknames(trace: &NicknameTrace, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("✎  Nicknames: \"{}\"", trace.full_name), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Derivation ━━━", ansi::GRAY));
    if trace.derivations.is_empty() {
        println!("{}", palette.dim("  No nicknames"));
        println!("\n{}", palette.paint("Possible reasons:", ansi::YELLOW));
        println!("  • No catalog short form lists this name");
        println!("  • The name has no vowel followed by a consonant");
        println!("\n{}", palette.dim("  Tip: Set QUILVYN_LOG=debug to see the stem that was tried"));
    } else {
        for (idx, derivation) in trace.derivations.iter().enumerate() {
            println!(
                "  {} {} {} {}",
                palette.paint(format!("[{}]", idx), ansi::GRAY),
                palette.bold(palette.paint(&derivation.nickname, ansi::GREEN)),
                palette.dim("│"),
                palette.paint(step_label(derivation.step), ansi::BLUE),
            );
        }
    }

    print_timing(&palette, trace.elapsed);
}

pub fn print_names(ethnicity: &str, reports: &[NameReport], color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("✎  Names: {ethnicity}"), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Results ━━━", ansi::GRAY));
    for (idx, report) in reports.iter().enumerate() {
        let d = &report.details;
        println!(
            "  {} {}",
            palette.paint(format!("[{}]", idx), ansi::GRAY),
            palette.bold(palette.paint(&d.full_name, ansi::GREEN)),
        );
        if d.descriptive {
            println!("      {} {}", palette.dim("descriptive:"), palette.paint(&d.ethnicity, ansi::BLUE));
            continue;
        }
        println!(
            "      {} {}  {} {:?}  {} {:?}",
            palette.dim("ethnicity:"),
            palette.paint(&d.ethnicity, ansi::BLUE),
            palette.dim("│ gender:"),
            d.category,
            palette.dim("│ order:"),
            d.order,
        );
        println!(
            "      {} {} {}  {} {} {}",
            palette.dim("personal:"),
            palette.paint(&d.personal, ansi::CYAN),
            fallback_note(&palette, &d.personal_from, &d.ethnicity),
            palette.dim("│ family:"),
            palette.paint(&d.family, ansi::CYAN),
            fallback_note(&palette, &d.family_from, &d.ethnicity),
        );
        if let Some(epithet) = &d.epithet {
            println!("      {} {}", palette.dim("epithet:"), palette.paint(epithet, ansi::YELLOW));
        }
    }

    let total = reports.iter().map(|r| r.elapsed).sum();
    print_timing(&palette, total);
}

fn print_timing(palette: &ansi::Palette, total: std::time::Duration) {
    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!("  Total: {}", palette.paint(format!("{:?}", total), ansi::GREEN));
    println!();
}

fn fallback_note(palette: &ansi::Palette, from: &str, ethnicity: &str) -> String {
    if from == ethnicity { String::new() } else { palette.dim(format!("(from {from})")) }
}

fn step_label(step: NicknameStep) -> &'static str {
    match step {
        NicknameStep::Catalog => "catalog",
        NicknameStep::Stem => "stem",
        NicknameStep::Diminutive => "diminutive",
        NicknameStep::Shortened => "shortened",
        NicknameStep::Doubled => "doubled",
    }
}
