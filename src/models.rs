//! Public models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Model structure
//!
//! Each model lives in its own module. Its computation is a pure function
//! (for example [`photovoltaic::module::correct`]) over plain input types,
//! and a [`twine_core::Model`] implementation wraps that function as a thin
//! adapter. Internal file layout under a model's module is an implementation
//! detail; only what the model module re-exports is public.

pub mod photovoltaic;
