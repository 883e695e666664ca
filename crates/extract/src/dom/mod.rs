// ABOUTME: DOM analysis module for content-bearing candidate selection.
// ABOUTME: Exposes readability-style paragraph scoring and class/id weighting.

pub mod scoring;
