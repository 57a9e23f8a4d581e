/*!
# Quiz Generator

A small HTTP service that generates quiz and diagnostic questions for an
education platform, built in Rust.

## Overview

A front end asks for questions about a topic at some difficulty, or for a
diagnostic test matching a student's level, and renders the returned questions
as an ordered list. Every request is independent: nothing is stored, and each
response carries a freshly generated identifier.

## Architecture

### Frontend Layer
- **Technologies**: HTML, JavaScript
- A landing page with a quiz form and a diagnostic form, calling the JSON API
  and falling back to plain form posts when scripts are disabled

### Backend Layer
- **Technologies**: Rust, axum, tokio
- **Core Components**:
  - Models - Request/response payloads and validated difficulty/level types
  - Question Generator - Template-based generation behind a trait
  - Renderer - Escaped HTML ordered lists for the form fallback
  - Error Handler - Maps validation failures to JSON error responses

## Modules

- **models**: Request/response types, `Difficulty`, `StudentLevel`, topic validation
- **generator**: `QuestionGenerator` trait and `TemplateGenerator`
- **render**: HTML escaping and ordered-list rendering
- **config**: Environment-based server configuration
- **error**: `ApiError` and its HTTP response (web feature)
- **app**: Routing and handlers (web feature)

## REST API Endpoints

- `POST /generate_quiz` - `{topic, difficulty?}` to `{quiz_id, questions}`
- `POST /generate_diagnostic` - `{student_level?}` to `{diagnostic_id, questions}`
- `POST /quiz`, `POST /diagnostic` - Form equivalents returning an HTML page
- `GET /health` - Liveness check
*/

pub mod config;
pub mod generator;
pub mod models;
pub mod render;

#[cfg(feature = "web")]
pub mod app;
#[cfg(feature = "web")]
pub mod error;

/// Re-export the most used types to make them easier to reach
pub use config::{Config, ConfigError};
pub use generator::{QuestionGenerator, TemplateGenerator};
pub use models::*;
