use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::Quat;

/// Named components of a [`Quat`], in storage order.
#[repr(C)]
pub struct IJKW<T> {
    pub i: T,
    pub j: T,
    pub k: T,
    pub w: T,
    _priv: (),
}

impl<T> Deref for Quat<T> {
    type Target = IJKW<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl<T> DerefMut for Quat<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { mem::transmute(self) }
    }
}
