use super::*;

#[test]
fn mul_div255_variants_align() {
    for x in [0u16, 1, 127, 255] {
        for y in [0u16, 1, 127, 255] {
            assert_eq!(u16::from(mul_div255_u8(x, y)), mul_div255_u16(x, y));
        }
    }
}

#[test]
fn opaque_source_replaces_destination() {
    let mut dst = vec![10, 20, 30, 255];
    premul_over_in_place(&mut dst, &[200, 0, 0, 255]).unwrap();
    assert_eq!(dst, vec![200, 0, 0, 255]);
}

#[test]
fn transparent_source_keeps_destination() {
    let mut dst = vec![10, 20, 30, 255];
    premul_over_in_place(&mut dst, &[0, 0, 0, 0]).unwrap();
    assert_eq!(dst, vec![10, 20, 30, 255]);
}

#[test]
fn half_alpha_source_blends() {
    let mut dst = vec![0, 0, 255, 255];
    premul_over_in_place(&mut dst, &[128, 0, 0, 128]).unwrap();
    assert_eq!(dst[0], 128);
    assert_eq!(dst[2], 127);
    assert_eq!(dst[3], 255);
}

#[test]
fn mismatched_buffers_are_rejected() {
    let mut dst = vec![0u8; 8];
    assert!(premul_over_in_place(&mut dst, &[0u8; 4]).is_err());
}
