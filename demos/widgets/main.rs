//! Mounts one widget full screen.
//!
//! ```text
//! xotools braun
//! xotools simple --store ./todos
//! XOTOOLS_LOG=/tmp/xotools.log RUST_LOG=debug xotools countdown
//! ```

use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg, Program};
use clap::{Parser, ValueEnum};
use once_cell::sync::OnceCell;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use xotools_widgets::faces::{self, Countdown, Dial};
use xotools_widgets::todo::{self, FileStorage, Variant};

#[derive(Parser, Debug, Clone)]
#[command(name = "xotools", about = "Focus timers and to-do lists for the terminal")]
struct Cli {
    /// Widget to show.
    #[arg(value_enum, default_value_t = Face::Beautiful)]
    face: Face,

    /// Directory for saved to-do lists (default: <config dir>/xotools).
    #[arg(long, value_name = "DIR")]
    store: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Face {
    Beautiful,
    Braun,
    Visual,
    Countdown,
    Simple,
    Dynamic,
    Island,
}

static SELECTION: OnceCell<Cli> = OnceCell::new();

enum Widget {
    Dial(Dial),
    Countdown(Countdown),
    Todo(todo::Model),
}

struct App {
    widget: Widget,
}

impl App {
    fn mount(cli: &Cli) -> (Self, Option<Cmd>) {
        let mut cmd = None;
        let widget = match cli.face {
            Face::Beautiful => Widget::Dial(faces::beautiful()),
            Face::Braun => Widget::Dial(faces::braun()),
            Face::Visual => Widget::Dial(faces::visual()),
            Face::Countdown => {
                let mut c = faces::countdown();
                cmd = c.start();
                Widget::Countdown(c)
            }
            Face::Simple => {
                let store = match &cli.store {
                    Some(dir) => FileStorage::new(dir),
                    None => FileStorage::in_config_dir(),
                };
                tracing::info!(dir = %store.dir().display(), "todo store");
                Widget::Todo(todo::simple(Box::new(store)))
            }
            Face::Dynamic => Widget::Todo(todo::new(Variant::Dynamic)),
            Face::Island => Widget::Todo(todo::new(Variant::Island)),
        };
        tracing::info!(face = ?cli.face, "mounted");
        (Self { widget }, cmd)
    }
}

impl BubbleTeaModel for App {
    fn init() -> (Self, Option<Cmd>) {
        match SELECTION.get() {
            Some(cli) => App::mount(cli),
            None => App::mount(&Cli {
                face: Face::Beautiful,
                store: None,
            }),
        }
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        match &mut self.widget {
            Widget::Dial(d) => d.update(msg),
            Widget::Countdown(c) => c.update(msg),
            Widget::Todo(t) => t.update(msg),
        }
    }

    fn view(&self) -> String {
        let body = match &self.widget {
            Widget::Dial(d) => d.view(),
            Widget::Countdown(c) => c.view(),
            Widget::Todo(t) => t.view(),
        };
        format!("\n{}\n", body)
    }
}

/// Sends tracing output to the file named by `XOTOOLS_LOG`, if set. The
/// terminal belongs to the UI, so there is no stderr fallback.
fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    let Some(path) = std::env::var_os("XOTOOLS_LOG") else {
        return Ok(());
    };
    let file = File::create(path)?;
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .compact()
        .try_init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing()?;
    let _ = SELECTION.set(cli);

    let program = Program::<App>::builder()
        .alt_screen(true)
        .signal_handler(true)
        .build()?;
    program.run().await?;
    Ok(())
}
