//! Integration tests for gamut-rs crates.
//!
//! End-to-end checks that span several crates: conversion round trips over
//! every registered space and illuminant, lattice/facet/trim properties, and
//! the cache under concurrent callers.

#[cfg(test)]
mod cache;
#[cfg(test)]
mod geometry;
#[cfg(test)]
mod roundtrip;
