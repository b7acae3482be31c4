//! Diffscale - convert level difficulties between rating scales
//!
//! Level lists rate difficulty on several competing scales. Diffscale
//! translates a value from any of them to any other, and renders values
//! as (or reads them back from) each scale's human-readable labels.
//!
//! # Overview
//!
//! The **Punter** scale is canonical: every conversion routes
//! `source -> Punter -> destination`. **Grassy** uses Punter numbers with
//! its own names. **MichaelChan** and **Scheep** have their own numbers,
//! mapped onto Punter by piecewise-linear calibration tables that clamp
//! at their endpoints.
//!
//! # Quick Start
//!
//! ```
//! use diffscale::{convert, to_visual, visual_to_number, Scale};
//!
//! // Numbers or labels go in, numbers come out
//! let punter = convert("2.5💣", Scale::MichaelChan, Scale::Punter);
//! assert_eq!(to_visual(punter, Scale::Punter), "Skyline Extreme");
//!
//! assert_eq!(visual_to_number("Grandmaster II", Scale::Grassy), 8.5);
//! assert_eq!(to_visual(16.0, Scale::Punter), "TAS+3");
//! ```
//!
//! # Labels
//!
//! | Scale       | Example labels                                   |
//! |-------------|--------------------------------------------------|
//! | punter      | `Easy`, `High Madness`, `Skyline Master`, `TAS+4` |
//! | michaelchan | `5⚡`, `3💥`, `2.5💣`, `1.5🧨` (or `3e`, `2.5b`)   |
//! | scheep      | `Baby`, `Insane EX`, `???????`, `Cwktao's Wrath`  |
//! | grassy      | `Low Beginner`, `High Grandmaster I`, `Grandmaster V` |
//!
//! # Errors
//!
//! The numeric API never fails. Unreadable labels give NaN, which flows
//! through [`convert`] untouched; callers check with `f64::is_nan`.
//!
//! # Modules
//!
//! - [`convert`]: calibration tables and scale-to-scale routing
//! - [`visual`]: label rendering and parsing
//! - [`batch`]: parallel conversion of difficulty lists
//! - [`report`]: output formatters (JSON, CSV)

pub mod batch;
pub mod convert;
pub mod error;
pub mod number;
pub mod report;
pub mod scale;
pub mod visual;

pub use batch::{BatchConverter, ConversionRecord};
pub use convert::{convert, Conversion, Input};
pub use error::ScaleError;
pub use number::format_number;
pub use scale::Scale;
pub use visual::{punter_prefix, to_visual, visual_to_number};

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // PUBLIC API TESTS
    // ==========================================================================
    //
    // The four operations the leaderboard page calls, reachable from the
    // crate root.
    // ==========================================================================

    #[test]
    fn test_public_exports() {
        let _: f64 = convert(1.0, Scale::Punter, Scale::Scheep);
        let _: String = to_visual(1.0, Scale::Punter);
        let _: f64 = visual_to_number("Easy", Scale::Punter);
        let _: String = format_number(1.0);
    }

    #[test]
    fn test_scale_variants() {
        let _ = Scale::Punter;
        let _ = Scale::MichaelChan;
        let _ = Scale::Scheep;
        let _ = Scale::Grassy;
    }

    #[test]
    fn test_documented_examples() {
        assert_eq!(punter_prefix(0.50), "Floor ");
        assert_eq!(punter_prefix(1.50), "Skyline ");
        assert_ne!(punter_prefix(1.51), "Skyline ");
        assert_eq!(to_visual(16.0, Scale::Punter), "TAS+3");
        assert_eq!(visual_to_number("Grandmaster II", Scale::Grassy), 8.5);
        assert_eq!(visual_to_number("Low Grandmaster I", Scale::Grassy), 7.5);
        assert_eq!(format_number(7.00000000001), "7");
    }

    #[test]
    fn test_scheep_output_is_quantised() {
        let v = convert(10.0, Scale::Punter, Scale::Scheep);
        assert_eq!(v, (v * 100.0).round() / 100.0);
    }
}
