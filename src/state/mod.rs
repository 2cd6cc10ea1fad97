//! Client-side application state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` owns the two live sync sessions of the current room and the
//! active selection; `replica` is the local projection of one synced
//! document; `surface` configures which parts of the drawing widget's
//! chrome are rendered.

pub mod replica;
pub mod session;
pub mod surface;
