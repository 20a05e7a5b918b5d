//! # Games Onboarding Demo
//!
//! Presents the "Welcome to Apple Games" sheet headlessly, prints each
//! section as it is revealed, taps Continue once the sheet accepts input and
//! exits when the sheet is dismissed.
//!
//! ## Usage
//!
//! ```bash
//! games_onboarding --form-factor desktop --config onboarding.toml --dark
//! ```

use onboard_sheet::{cards, Card, FormFactor, OnboardingConfig, OnboardingSettings, RevealDriver, RevealPhase, SheetHost};
use onboard_ui::{Badge, Color, InputState, Rect, Stack, Symbol, Text, Theme, UIRenderer, View};
use std::process::ExitCode;
use std::sync::atomic::Ordering;
use std::time::{Duration, Instant};

/// Frame time (60 Hz).
const DT: f32 = 1.0 / 60.0;
/// Give up if the sheet is still up after this long.
const TIMEOUT: Duration = Duration::from_secs(10);

/// Command line options.
struct Options {
    form_factor: FormFactor,
    config: Option<String>,
    dark: bool,
    driver: RevealDriver,
}

fn main() -> ExitCode {
    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║         ONBOARD - GAMES ONBOARDING SHEET                         ║");
    println!("╚══════════════════════════════════════════════════════════════════╝");
    println!();

    let Some(options) = parse_args() else {
        return ExitCode::SUCCESS;
    };

    let settings = match &options.config {
        Some(path) => match OnboardingSettings::load(path) {
            Ok(settings) => settings,
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => OnboardingSettings::default(),
    };

    let runtime = match tokio::runtime::Builder::new_current_thread().enable_time().build() {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("error: failed to start runtime: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("┌─ CONFIGURATION ─────────────────────────────────────────────────┐");
    println!("│ Form Factor:        {:?}", options.form_factor);
    println!("│ Reveal Driver:      {:?}", options.driver);
    println!("│ Theme:              {}", if options.dark { "dark" } else { "light" });
    println!("│ Icon Delay:         {:?}", settings.reveal.icon(options.form_factor));
    println!("└──────────────────────────────────────────────────────────────────┘");
    println!();

    runtime.block_on(run(options, settings))
}

fn parse_args() -> Option<Options> {
    let args: Vec<String> = std::env::args().collect();
    let mut options = Options {
        form_factor: FormFactor::current(),
        config: None,
        dark: false,
        driver: RevealDriver::Task,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--form-factor" | "-f" => {
                if let Some(value) = args.get(i + 1) {
                    match value.parse() {
                        Ok(form_factor) => options.form_factor = form_factor,
                        Err(err) => eprintln!("warning: {err}, keeping {:?}", options.form_factor),
                    }
                    i += 1;
                }
            }
            "--config" | "-c" => {
                if let Some(value) = args.get(i + 1) {
                    options.config = Some(value.clone());
                    i += 1;
                }
            }
            "--frames" => options.driver = RevealDriver::Frame,
            "--dark" => options.dark = true,
            "--help" | "-h" => {
                println!("Usage: games_onboarding [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -f, --form-factor <KIND>   phone, tablet or desktop (default: this platform)");
                println!("  -c, --config <PATH>        TOML file with reveal timings and sheet metrics");
                println!("      --frames               Drive the reveal from the frame loop");
                println!("      --dark                 Dark appearance");
                println!("  -h, --help                 Show this help");
                return None;
            }
            other => eprintln!("warning: ignoring unknown argument {other}"),
        }
        i += 1;
    }
    Some(options)
}

fn bounds(form_factor: FormFactor) -> Rect {
    match form_factor {
        FormFactor::Phone => Rect::new(0.0, 0.0, 393.0, 852.0),
        FormFactor::Tablet => Rect::new(0.0, 0.0, 580.0, 720.0),
        FormFactor::Desktop => Rect::new(0.0, 0.0, 500.0, 640.0),
    }
}

fn footer() -> impl View {
    Stack::vertical(6.0)
        .child(Symbol::new("person.3.fill").color(Color::RED))
        .child(
            Text::new(
                "Your gameplay information, including what you play and your game activity, \
                 is used to improve Game Center.",
            )
            .size(11.0)
            .color(Color::GRAY),
        )
}

async fn run(options: Options, settings: OnboardingSettings) -> ExitCode {
    let theme = if options.dark { Theme::DARK } else { Theme::LIGHT };
    let mut host = SheetHost::new(bounds(options.form_factor)).with_theme(theme);
    let presented = host.presented_flag();

    let config = OnboardingConfig::builder()
        .tint(Color::RED)
        .title("Welcome to Apple Games")
        .icon(Badge::new("gamecontroller.fill", Color::RED))
        .cards(cards![
            Card::new(
                "list.bullet",
                "See What's New, Just for you",
                "Explore what's happening in your games and what to play next.",
            ),
            Card::new(
                "person.2",
                "Play and Compete with Friends",
                "Challenge friends, see what they're playing, and play together.",
            ),
            Card::new(
                "square.stack",
                "All Your Games in One Place",
                "Access your full game library from the App Store and Apple Arcade.",
            ),
        ])
        .footer(footer())
        .on_continue(move || {
            println!("Continue tapped, closing sheet");
            presented.store(false, Ordering::SeqCst);
        })
        .form_factor(options.form_factor)
        .settings(settings)
        .driver(options.driver)
        .build();

    host.present(config);

    let start = Instant::now();
    let mut ticker = tokio::time::interval(Duration::from_secs_f32(DT));
    let mut input = InputState::new();
    let mut renderer = UIRenderer::new();
    let mut last_phase = None;
    let mut tapped = false;

    while host.is_presented() {
        ticker.tick().await;
        if start.elapsed() > TIMEOUT {
            eprintln!("error: sheet still presented after {TIMEOUT:?}");
            return ExitCode::FAILURE;
        }

        input.begin_frame();
        if !tapped && host.phase() == Some(RevealPhase::Interactive) {
            if let Some(sheet) = host.sheet() {
                let (x, y) = sheet.continue_rect().center();
                input.tap(x, y);
                tapped = true;
            }
        }
        host.update(&input, DT);

        renderer.begin_frame();
        host.render(&mut renderer);
        let frame = renderer.end_frame();

        let phase = host.phase();
        if phase != last_phase {
            if let Some(phase) = phase {
                let texts = frame.texts().count();
                println!(
                    "[{:>6.3}s] {:<16} {} text runs",
                    start.elapsed().as_secs_f32(),
                    format!("{phase:?}"),
                    texts
                );
            }
            last_phase = phase;
        }
    }

    println!();
    println!("Sheet dismissed after {:.2}s", start.elapsed().as_secs_f32());
    ExitCode::SUCCESS
}
