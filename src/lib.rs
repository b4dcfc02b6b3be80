//! # geostamp
//!
//! Stamp photos with GPS coordinates and capture time, camera-app style.
//! Two lines of text — `Location: <lat>, <lon>` and `Time: HH:mm:ss` — are
//! composited into the bottom-right corner of an image, which can then be
//! exported as a quality-100 JPEG named `IMG_<yyyyMMdd_HHmmss>.jpg`.
//!
//! # Architecture: Renderer Plus Narrow Collaborators
//!
//! The one piece of real logic is the annotation renderer, a pure function
//! from image plus strings to image:
//!
//! ```text
//! capture  →  Photo { pixels, fix?, timestamp }
//! render   →  stamped copy (same dimensions, text drawn)
//! export   →  Pictures/IMG_20240601_140530.jpg
//! ```
//!
//! Capture and export sit behind one-method traits so the pipeline in
//! [`stamp`] can be tested against mocks, and so the renderer itself never
//! performs I/O. Rendering operates on a private copy of the input and
//! keeps no state between calls, which makes concurrent use trivially safe.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`annotate`] | The renderer: anchor math, embedded fonts, compositing |
//! | [`capture`] | Capture collaborator — decodes camera output into a [`capture::Photo`] |
//! | [`export`] | Export collaborator — JPEG encoding and gallery filenames |
//! | [`permissions`] | Camera/storage/location capability checks, one re-prompt each |
//! | [`stamp`] | Pipeline: capture → format lines → render → export |
//! | [`config`] | `geostamp.toml` loading and validation |
//!
//! # Design Decisions
//!
//! ## Embedded Fonts
//!
//! Both DejaVu Sans faces are compiled into the binary. Stamping must
//! produce identical pixels on every machine, so the host's font
//! configuration is never consulted. The binary stays self-contained: no
//! fontconfig, no system dependencies.
//!
//! ## The `null, null` Placeholder
//!
//! When no GPS fix is available the location line reads literally
//! `Location: null, null`. That is deliberately a caller-side formatting
//! choice in [`stamp`]: the renderer treats every string as opaque text and
//! has no notion of missing data.
//!
//! ## No Erase Step
//!
//! Re-stamping an already stamped image draws the text again on top. The
//! renderer composites; it never inspects or undoes previous annotations.
//!
//! ## Fixed JPEG Quality
//!
//! Exports are always quality 100. The camera app this mirrors exposes no
//! compression trade-off, and neither do we.

pub mod annotate;
pub mod capture;
pub mod config;
pub mod export;
pub mod permissions;
pub mod stamp;
