//! Eventist - A Terminal User Interface (TUI) for community event feeds
//!
//! This library provides a complete terminal-based interface for browsing
//! a JSON feed of community events. It includes a live search filter, a
//! featured next-event panel with a countdown, like persistence, calendar
//! and social sharing, and a rich interactive UI built with Ratatui.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`config`] - Application configuration management
//! * [`events`] - Event records, parsing, and ordering
//! * [`rows`] - Month grouping and search filtering for the list view
//! * [`storage`] - Persistence for likes and the color scheme
//! * [`source`] - Pluggable event feed loading
//! * [`ui`] - Terminal user interface components

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Countdown arithmetic and formatting for the featured panel
pub mod countdown;

/// Event records and datetime handling
pub mod events;

/// Calendar and social share link builders
pub mod export;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Month grouping, dedup, and filtering of list rows
pub mod rows;

/// Event feed sources
pub mod source;

/// Local storage layer for likes and display preferences
pub mod storage;

/// Color schemes and widget styles
pub mod theme;

/// Terminal user interface components and rendering
pub mod ui;
