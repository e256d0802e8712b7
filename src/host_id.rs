//! Deterministic node identifier derived from a host's IPv4 address and port.
//!
//! The packed form is the port as a big-endian `u16` followed by the address as a
//! length-prefixed byte string: `[port_hi, port_lo, 4, a, b, c, d]`. The identifier is the
//! SHA-1 digest of those seven bytes, read as five big-endian 32-bit words.

use std::net::Ipv4Addr;

use sha1::{Digest, Sha1};

pub const PACKED_LEN: usize = 7;

pub fn pack(port: u16, ip: Ipv4Addr) -> [u8; PACKED_LEN] {
    let mut buf = [0u8; PACKED_LEN];
    buf[..2].copy_from_slice(&port.to_be_bytes());
    buf[2] = 4;
    buf[3..].copy_from_slice(&ip.octets());
    buf
}

pub fn host_id(port: u16, ip: Ipv4Addr) -> [u32; 5] {
    let digest = Sha1::digest(pack(port, ip));
    let mut words = [0u32; 5];
    for (word, chunk) in words.iter_mut().zip(digest.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    words
}

pub fn format_id(words: &[u32; 5]) -> String {
    format!(
        "0x{:08x} {:08x} {:08x} {:08x} {:08x}",
        words[0], words[1], words[2], words[3], words[4]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_port_then_length_prefixed_address() {
        assert_eq!(
            pack(8080, Ipv4Addr::LOCALHOST),
            [0x1f, 0x90, 0x04, 127, 0, 0, 1]
        );
    }

    #[test]
    fn localhost_8080_digest() {
        let id = host_id(8080, Ipv4Addr::LOCALHOST);
        assert_eq!(
            format_id(&id),
            "0x3daf4995 ed0efcf1 ca3aa0b1 ea7eb480 9b7ca1a0"
        );
    }

    #[test]
    fn gateway_port_digest() {
        let id = host_id(5851, Ipv4Addr::new(10, 0, 0, 1));
        assert_eq!(
            format_id(&id),
            "0x6f03b36b a55d7002 785d4eac 57525d8b 23ea28da"
        );
    }

    #[test]
    fn same_input_same_id() {
        let ip = Ipv4Addr::new(192, 0, 2, 9);
        assert_eq!(host_id(3630, ip), host_id(3630, ip));
        assert_ne!(host_id(3630, ip), host_id(3631, ip));
    }

    #[test]
    fn words_are_zero_padded() {
        assert_eq!(
            format_id(&[0x1, 0xab, 0, 0xffff_ffff, 0x10]),
            "0x00000001 000000ab 00000000 ffffffff 00000010"
        );
    }
}
