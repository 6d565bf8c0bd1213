/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io;
use std::mem::MaybeUninit;
use std::os::fd::AsRawFd;

use libc::{c_int, c_void, socklen_t};

unsafe fn setsockopt<T>(fd: c_int, level: c_int, name: c_int, value: T) -> io::Result<()>
where
    T: Copy,
{
    unsafe {
        let payload = &value as *const T as *const c_void;
        let ret = libc::setsockopt(fd, level, name, payload, size_of::<T>() as socklen_t);
        if ret == -1 {
            return Err(io::Error::last_os_error());
        }
        Ok(())
    }
}

#[cfg(any(test, target_os = "linux", target_os = "android"))]
unsafe fn getsockopt<T>(fd: c_int, level: c_int, name: c_int) -> io::Result<T>
where
    T: Copy,
{
    unsafe {
        let mut payload: MaybeUninit<T> = MaybeUninit::uninit();
        let mut len = size_of::<T>() as socklen_t;
        let ret = libc::getsockopt(fd, level, name, payload.as_mut_ptr().cast(), &mut len);
        if ret == -1 {
            return Err(io::Error::last_os_error());
        }
        Ok(payload.assume_init())
    }
}

pub(super) fn set_int_opt<T: AsRawFd>(
    fd: &T,
    level: c_int,
    name: c_int,
    value: c_int,
) -> io::Result<()> {
    unsafe { setsockopt(fd.as_raw_fd(), level, name, value) }
}

#[cfg(any(target_os = "linux", target_os = "android"))]
pub(super) fn get_int_opt<T: AsRawFd>(fd: &T, level: c_int, name: c_int) -> io::Result<c_int> {
    unsafe { getsockopt(fd.as_raw_fd(), level, name) }
}

pub(super) fn set_recv_ipv6_pktinfo<T: AsRawFd>(fd: &T, enable: bool) -> io::Result<()> {
    set_int_opt(
        fd,
        libc::IPPROTO_IPV6,
        libc::IPV6_RECVPKTINFO,
        enable as c_int,
    )
}
