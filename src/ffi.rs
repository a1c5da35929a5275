// src/ffi.rs
//! C ABI surface: the host's provider table
//!
//! `sqlcipher_rustcrypto_setup` fills a [`SqlcipherProvider`] with
//! `extern "C"` entries. Each entry turns raw pointers and ints into slices
//! and enums, forwards to [`registry::provider`], and reports the outcome as
//! `SQLITE_OK` / `SQLITE_ERROR`.

use std::ffi::{c_char, c_int, c_uchar, c_void, CString};
use std::slice;
use std::sync::OnceLock;

use crate::consts::{SQLITE_ERROR, SQLITE_OK};
use crate::enums::{CipherMode, HmacAlgorithm, KdfAlgorithm};
use crate::error::{ProviderError, Result, Status};
use crate::registry;

/// Field order matches the host's `sqlcipher_provider` struct.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct SqlcipherProvider {
    pub activate: Option<unsafe extern "C" fn(ctx: *mut c_void) -> c_int>,
    pub deactivate: Option<unsafe extern "C" fn(ctx: *mut c_void) -> c_int>,
    pub get_provider_name: Option<unsafe extern "C" fn(ctx: *mut c_void) -> *const c_char>,
    pub add_random:
        Option<unsafe extern "C" fn(ctx: *mut c_void, buffer: *mut c_void, length: c_int) -> c_int>,
    pub random:
        Option<unsafe extern "C" fn(ctx: *mut c_void, buffer: *mut c_void, length: c_int) -> c_int>,
    pub hmac: Option<
        unsafe extern "C" fn(
            ctx: *mut c_void,
            algorithm: c_int,
            hmac_key: *mut c_uchar,
            key_sz: c_int,
            input: *mut c_uchar,
            in_sz: c_int,
            input2: *mut c_uchar,
            in2_sz: c_int,
            out: *mut c_uchar,
        ) -> c_int,
    >,
    pub kdf: Option<
        unsafe extern "C" fn(
            ctx: *mut c_void,
            algorithm: c_int,
            pass: *const c_uchar,
            pass_sz: c_int,
            salt: *mut c_uchar,
            salt_sz: c_int,
            workfactor: c_int,
            key_sz: c_int,
            key: *mut c_uchar,
        ) -> c_int,
    >,
    pub cipher: Option<
        unsafe extern "C" fn(
            ctx: *mut c_void,
            mode: c_int,
            key: *mut c_uchar,
            key_sz: c_int,
            iv: *mut c_uchar,
            input: *mut c_uchar,
            in_sz: c_int,
            out: *mut c_uchar,
        ) -> c_int,
    >,
    pub get_cipher: Option<unsafe extern "C" fn(ctx: *mut c_void) -> *const c_char>,
    pub get_key_sz: Option<unsafe extern "C" fn(ctx: *mut c_void) -> c_int>,
    pub get_iv_sz: Option<unsafe extern "C" fn(ctx: *mut c_void) -> c_int>,
    pub get_block_sz: Option<unsafe extern "C" fn(ctx: *mut c_void) -> c_int>,
    pub get_hmac_sz: Option<unsafe extern "C" fn(ctx: *mut c_void, algorithm: c_int) -> c_int>,
    pub ctx_init: Option<unsafe extern "C" fn(ctx: *mut *mut c_void) -> c_int>,
    pub ctx_free: Option<unsafe extern "C" fn(ctx: *mut *mut c_void) -> c_int>,
    pub fips_status: Option<unsafe extern "C" fn(ctx: *mut c_void) -> c_int>,
    pub get_provider_version: Option<unsafe extern "C" fn(ctx: *mut c_void) -> *const c_char>,
}

// NUL-terminated copies of the descriptor strings, built once
struct CNames {
    name: CString,
    version: CString,
    cipher: CString,
}

static C_NAMES: OnceLock<CNames> = OnceLock::new();

fn c_string(s: &str) -> CString {
    CString::new(s).unwrap_or_default()
}

fn c_names() -> &'static CNames {
    C_NAMES.get_or_init(|| {
        let d = registry::descriptor();
        CNames {
            name: c_string(d.name),
            version: c_string(d.version),
            cipher: c_string(d.cipher),
        }
    })
}

fn status<T>(res: Result<T>) -> c_int {
    if let Err(err) = &res {
        tracing::debug!(%err, "provider call failed");
    }
    Status::from(res).code()
}

fn len(sz: c_int) -> Result<usize> {
    usize::try_from(sz).map_err(|_| ProviderError::InvalidArgument(format!("negative size {sz}")))
}

fn size_to_c(sz: usize) -> c_int {
    c_int::try_from(sz).unwrap_or(0)
}

/// # Safety
/// `ptr` must be valid for `sz` reads when `sz > 0`.
unsafe fn input<'a>(ptr: *const c_uchar, sz: c_int) -> Result<&'a [u8]> {
    input_n(ptr, len(sz)?)
}

/// # Safety
/// `ptr` must be valid for `n` reads when `n > 0`.
unsafe fn input_n<'a>(ptr: *const c_uchar, n: usize) -> Result<&'a [u8]> {
    if n == 0 {
        return Ok(&[]);
    }
    if ptr.is_null() {
        return Err(ProviderError::InvalidArgument("null input buffer".into()));
    }
    Ok(slice::from_raw_parts(ptr, n))
}

/// # Safety
/// `ptr` must be valid for `n` writes when `n > 0` and not aliased elsewhere.
unsafe fn output<'a>(ptr: *mut c_uchar, n: usize) -> Result<&'a mut [u8]> {
    if n == 0 {
        return Ok(&mut []);
    }
    if ptr.is_null() {
        return Err(ProviderError::InvalidArgument("null output buffer".into()));
    }
    Ok(slice::from_raw_parts_mut(ptr, n))
}

// Distinct `n`-byte regions starting at `a` and `b` that share any byte
fn partially_overlap(a: *const c_uchar, b: *const c_uchar, n: usize) -> bool {
    let (a, b) = (a as usize, b as usize);
    n > 0 && a != b && a < b.saturating_add(n) && b < a.saturating_add(n)
}

unsafe extern "C" fn activate(_ctx: *mut c_void) -> c_int {
    status(registry::provider().activate())
}

unsafe extern "C" fn deactivate(_ctx: *mut c_void) -> c_int {
    status(registry::provider().deactivate())
}

unsafe extern "C" fn get_provider_name(_ctx: *mut c_void) -> *const c_char {
    c_names().name.as_ptr()
}

unsafe extern "C" fn get_provider_version(_ctx: *mut c_void) -> *const c_char {
    c_names().version.as_ptr()
}

unsafe extern "C" fn add_random(_ctx: *mut c_void, buffer: *mut c_void, length: c_int) -> c_int {
    status(
        input(buffer as *const c_uchar, length)
            .and_then(|entropy| registry::provider().add_random(entropy)),
    )
}

unsafe extern "C" fn random(_ctx: *mut c_void, buffer: *mut c_void, length: c_int) -> c_int {
    status(
        len(length)
            .and_then(|n| output(buffer as *mut c_uchar, n))
            .and_then(|buf| registry::provider().random(buf)),
    )
}

#[allow(clippy::too_many_arguments)]
unsafe extern "C" fn hmac(
    _ctx: *mut c_void,
    algorithm: c_int,
    hmac_key: *mut c_uchar,
    key_sz: c_int,
    in1: *mut c_uchar,
    in_sz: c_int,
    in2: *mut c_uchar,
    in2_sz: c_int,
    out: *mut c_uchar,
) -> c_int {
    let run = || -> Result<()> {
        let provider = registry::provider();
        let algorithm = HmacAlgorithm::try_from(algorithm)?;
        let width = provider.hmac_size(algorithm);
        if width == 0 {
            return Err(ProviderError::UnsupportedAlgorithm(algorithm));
        }
        provider.hmac(
            algorithm,
            input(hmac_key, key_sz)?,
            input(in1, in_sz)?,
            input(in2, in2_sz)?,
            output(out, width)?,
        )
    };
    status(run())
}

#[allow(clippy::too_many_arguments)]
unsafe extern "C" fn kdf(
    _ctx: *mut c_void,
    algorithm: c_int,
    pass: *const c_uchar,
    pass_sz: c_int,
    salt: *mut c_uchar,
    salt_sz: c_int,
    workfactor: c_int,
    key_sz: c_int,
    key: *mut c_uchar,
) -> c_int {
    let run = || -> Result<()> {
        registry::provider().kdf(
            KdfAlgorithm::try_from(algorithm)?,
            input(pass, pass_sz)?,
            input(salt, salt_sz)?,
            u32::try_from(workfactor).unwrap_or(0),
            output(key, len(key_sz)?)?,
        )
    };
    status(run())
}

/// `in_buf` and `out` are either the same pointer (transformed in place) or
/// disjoint; partially overlapping regions are rejected.
#[allow(clippy::too_many_arguments)]
unsafe extern "C" fn cipher(
    _ctx: *mut c_void,
    mode: c_int,
    key: *mut c_uchar,
    key_sz: c_int,
    iv: *mut c_uchar,
    in_buf: *mut c_uchar,
    in_sz: c_int,
    out: *mut c_uchar,
) -> c_int {
    let run = || -> Result<()> {
        let provider = registry::provider();
        let mode = CipherMode::try_from(mode)?;
        let key = input(key, key_sz)?;
        let iv = input_n(iv, provider.iv_size())?;
        let n = len(in_sz)?;
        if n > 0 && std::ptr::eq(in_buf, out) {
            return provider.cipher_in_place(mode, key, iv, output(out, n)?);
        }
        if partially_overlap(in_buf, out, n) {
            return Err(ProviderError::InvalidArgument(
                "cipher input and output partially overlap".into(),
            ));
        }
        provider.cipher(mode, key, iv, input(in_buf, in_sz)?, output(out, n)?)
    };
    status(run())
}

unsafe extern "C" fn get_cipher(_ctx: *mut c_void) -> *const c_char {
    c_names().cipher.as_ptr()
}

unsafe extern "C" fn get_key_sz(_ctx: *mut c_void) -> c_int {
    size_to_c(registry::descriptor().key_size)
}

unsafe extern "C" fn get_iv_sz(_ctx: *mut c_void) -> c_int {
    size_to_c(registry::descriptor().iv_size)
}

unsafe extern "C" fn get_block_sz(_ctx: *mut c_void) -> c_int {
    size_to_c(registry::descriptor().block_size)
}

unsafe extern "C" fn get_hmac_sz(_ctx: *mut c_void, algorithm: c_int) -> c_int {
    match HmacAlgorithm::try_from(algorithm) {
        Ok(algorithm) => size_to_c(registry::provider().hmac_size(algorithm)),
        Err(_) => 0,
    }
}

// The wrapped crates keep no per-connection state.
unsafe extern "C" fn ctx_init(_ctx: *mut *mut c_void) -> c_int {
    SQLITE_OK
}

unsafe extern "C" fn ctx_free(_ctx: *mut *mut c_void) -> c_int {
    SQLITE_OK
}

unsafe extern "C" fn fips_status(_ctx: *mut c_void) -> c_int {
    c_int::from(registry::descriptor().fips)
}

/// Fill every entry of the host's provider table.
///
/// # Safety
/// `p` must be null or point to a writable `SqlcipherProvider`.
#[no_mangle]
pub unsafe extern "C" fn sqlcipher_rustcrypto_setup(p: *mut SqlcipherProvider) -> c_int {
    let Some(p) = p.as_mut() else {
        return SQLITE_ERROR;
    };
    *p = provider_table();
    SQLITE_OK
}

/// The fully populated table
pub fn provider_table() -> SqlcipherProvider {
    SqlcipherProvider {
        activate: Some(activate),
        deactivate: Some(deactivate),
        get_provider_name: Some(get_provider_name),
        add_random: Some(add_random),
        random: Some(random),
        hmac: Some(hmac),
        kdf: Some(kdf),
        cipher: Some(cipher),
        get_cipher: Some(get_cipher),
        get_key_sz: Some(get_key_sz),
        get_iv_sz: Some(get_iv_sz),
        get_block_sz: Some(get_block_sz),
        get_hmac_sz: Some(get_hmac_sz),
        ctx_init: Some(ctx_init),
        ctx_free: Some(ctx_free),
        fips_status: Some(fips_status),
        get_provider_version: Some(get_provider_version),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_sizes_are_rejected() {
        assert!(len(-1).is_err());
        assert_eq!(len(16).unwrap(), 16);
    }

    #[test]
    fn null_with_zero_size_is_an_empty_slice() {
        let got = unsafe { input(std::ptr::null(), 0) }.unwrap();
        assert!(got.is_empty());
        assert!(unsafe { input(std::ptr::null(), 4) }.is_err());
    }

    #[test]
    fn overlap_detection() {
        let buf = [0u8; 64];
        let base = buf.as_ptr();
        let at = |i: usize| base.wrapping_add(i);
        assert!(partially_overlap(at(0), at(8), 16));
        assert!(partially_overlap(at(8), at(0), 16));
        assert!(!partially_overlap(at(0), at(0), 16));
        assert!(!partially_overlap(at(0), at(16), 16));
        assert!(!partially_overlap(at(0), at(8), 0));
    }

    #[test]
    fn interior_nul_becomes_empty_string() {
        assert_eq!(c_string("xsalsa20").as_bytes(), b"xsalsa20");
        assert!(c_string("bad\0name").as_bytes().is_empty());
    }
}
