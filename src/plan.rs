//! Build-plan derivation.
//!
//! Everything the compiler invocation needs (flags, output descriptor,
//! includes, sources, libraries) is a deterministic function of the one
//! [`Target`] selector. Nothing here touches the filesystem or spawns
//! processes; assembly and invocation live in `toolchain`.

use clap::ValueEnum;
use serde::Serialize;

/// CPLUG checkout root, relative to the example directory this tool runs from.
const CPLUG_ROOT: &str = "../..";

/// Flags common to both targets: quiet banner, multithreaded runtime CRT,
/// UTF-8 sources, debug symbols, C++ exceptions, parallel compilation, /W3.
const BASELINE_FLAGS: &[&str] = &["/nologo", "/MD", "/utf-8", "/Zi", "/EHsc", "/MP3", "/W3"];

/// Libraries linked by both targets.
const BASELINE_LIBS: &[&str] = &["opengl32.lib", "kernel32.lib", "user32.lib", "gdi32.lib"];

/// Which artifact to build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// VST3 plugin container (dynamic library loaded by a host).
    #[value(name = "vst3")]
    Vst3,
    /// Standalone executable with its own window and event loop.
    #[value(name = "standalone")]
    Standalone,
}

impl Target {
    pub fn id(self) -> &'static str {
        match self {
            Self::Vst3 => "vst3",
            Self::Standalone => "standalone",
        }
    }

    /// Extension of the produced artifact.
    pub fn output_extension(self) -> &'static str {
        match self {
            Self::Vst3 => "vst3",
            Self::Standalone => "exe",
        }
    }

    /// The one platform-entry source appended for this target: the plugin
    /// container glue for VST3, the window/event-loop host for standalone.
    /// Mutually exclusive, never both.
    pub fn glue_source(self) -> String {
        match self {
            Self::Vst3 => format!("{CPLUG_ROOT}/src/cplug_vst3.c"),
            Self::Standalone => format!("{CPLUG_ROOT}/src/cplug_standalone_win.c"),
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Fully derived inputs for one compiler invocation.
///
/// All lists are ordered; `toolchain::arguments` consumes them in slot order
/// without reordering or deduplication.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BuildPlan {
    pub target: Target,
    pub flags: Vec<String>,
    pub output_name: String,
    pub output_extension: String,
    pub includes: Vec<String>,
    pub sources: Vec<String>,
    pub libraries: Vec<String>,
}

impl BuildPlan {
    pub fn derive(target: Target) -> Self {
        let mut flags: Vec<String> = BASELINE_FLAGS.iter().map(ToString::to_string).collect();
        if target == Target::Vst3 {
            // Dynamic-library output, appended after the baseline.
            flags.push("/LD".to_string());
        }

        let includes = vec![
            format!("/I{CPLUG_ROOT}/src"),
            "/Iimgui".to_string(),
            "/Iimgui/backends".to_string(),
            // Force-include the per-example plugin configuration into every
            // translation unit.
            "/FIconfig.h".to_string(),
        ];

        let mut sources = vec![
            "main.cpp".to_string(),
            "imgui/imgui.cpp".to_string(),
            "imgui/backends/imgui_impl_win32.cpp".to_string(),
            "imgui/backends/imgui_impl_opengl3.cpp".to_string(),
            "imgui/imgui_draw.cpp".to_string(),
            "imgui/imgui_tables.cpp".to_string(),
            "imgui/imgui_widgets.cpp".to_string(),
        ];
        sources.push(target.glue_source());

        let mut libraries: Vec<String> = BASELINE_LIBS.iter().map(ToString::to_string).collect();
        if target == Target::Standalone {
            // COM, used by the standalone host (file dialogs, drag and drop).
            libraries.push("Ole32.lib".to_string());
        }

        Self {
            target,
            flags,
            output_name: "plugin".to_string(),
            output_extension: target.output_extension().to_string(),
            includes,
            sources,
            libraries,
        }
    }

    /// `plugin.vst3` or `plugin.exe`.
    pub fn output_file(&self) -> String {
        format!("{}.{}", self.output_name, self.output_extension)
    }

    /// Debug-symbol file written next to the artifact.
    pub fn pdb_file(&self) -> String {
        format!("{}.pdb", self.output_name)
    }
}
