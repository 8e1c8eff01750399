// Licensed under the Apache-2.0 license

//! Fixed RSA-2048 keys for tests and for signing development images.
//! These keys are public knowledge and must never protect a real device.

use fsbl_image_types::{rsa_exponent_field, ImageRsaPrivKey, ImageRsaPubKey};

pub const RSA_PUB_EXPONENT: u32 = 65537;

/// Random 2048-bit keys with public exponent 65537, printed least
/// significant byte first. `modulus_ext` is `2^4096 mod modulus`.
pub const PPK_PUBLIC: ImageRsaPubKey = ImageRsaPubKey {
    modulus: [
        0x9b, 0x68, 0x5f, 0xd9, 0x4a, 0x24, 0xbc, 0x49, 0x32, 0xa1, 0x3b, 0x23, 0xd9, 0x85, 0x97,
        0x6b, 0x1a, 0xbf, 0x02, 0x76, 0xbd, 0xdd, 0x2c, 0xd5, 0x11, 0x4b, 0x62, 0xe0, 0x63, 0x76,
        0xce, 0x11, 0x8b, 0x74, 0xe7, 0x93, 0xec, 0xb3, 0xb3, 0x1b, 0xec, 0x2d, 0xa2, 0x6c, 0xa7,
        0xe6, 0x28, 0xa6, 0xac, 0xb5, 0xec, 0x46, 0x17, 0x08, 0xb8, 0x58, 0x48, 0x48, 0x27, 0x5b,
        0x07, 0x0d, 0x63, 0x2a, 0xb7, 0xfe, 0x78, 0xa3, 0x6e, 0x0d, 0x01, 0xe4, 0x38, 0xd0, 0xc7,
        0x5e, 0x63, 0xd0, 0xd0, 0xa5, 0xf9, 0xb0, 0x48, 0x44, 0x2f, 0x2f, 0xb2, 0xb8, 0xe7, 0x80,
        0xdb, 0x53, 0x5b, 0xc5, 0x06, 0x3a, 0x90, 0x9d, 0x9a, 0x26, 0xea, 0x69, 0xf4, 0xb7, 0x70,
        0xe3, 0x36, 0x98, 0xce, 0x24, 0xeb, 0x8b, 0x93, 0x73, 0x98, 0x98, 0x43, 0x1d, 0xf1, 0x31,
        0x84, 0xa6, 0x1e, 0x5f, 0xb7, 0x93, 0x34, 0x3f, 0x56, 0xde, 0xdf, 0x2f, 0x0d, 0x7f, 0x89,
        0x41, 0x56, 0xd0, 0x47, 0x83, 0x98, 0xff, 0xd9, 0x65, 0x1c, 0xd6, 0x78, 0xd6, 0x5d, 0x39,
        0x39, 0x5d, 0x78, 0xfb, 0xe8, 0x4a, 0x97, 0x03, 0x24, 0x94, 0x42, 0x0a, 0x47, 0xb4, 0x2b,
        0xa0, 0x48, 0xbe, 0x35, 0xb2, 0x3a, 0xd6, 0x6d, 0x9e, 0xb8, 0xfb, 0xc3, 0xbf, 0xbd, 0x2b,
        0xbe, 0x9f, 0xab, 0xd4, 0x36, 0xc9, 0x79, 0x97, 0xe3, 0x2d, 0xe7, 0x59, 0x4b, 0xb5, 0x4a,
        0x46, 0x58, 0xef, 0x81, 0xa6, 0x8c, 0x95, 0x14, 0x3d, 0xc7, 0xd2, 0x9b, 0x5c, 0x91, 0xe0,
        0x60, 0xc2, 0x54, 0xbe, 0xf1, 0xf4, 0x51, 0xb7, 0x07, 0x4e, 0xbe, 0x03, 0xc9, 0xe4, 0xae,
        0x41, 0xd1, 0xe8, 0xb0, 0x8f, 0x20, 0x9d, 0x2e, 0x60, 0xf1, 0xf6, 0x59, 0xe6, 0x10, 0x5b,
        0x80, 0xdb, 0x74, 0xd9, 0x49, 0x08, 0xe1, 0x2c, 0x97, 0x1c, 0xfd, 0x8b, 0x2f, 0x80, 0x7d,
        0xda,
    ],
    modulus_ext: [
        0x0f, 0xe6, 0x0e, 0x86, 0x38, 0x60, 0x24, 0xf4, 0x8e, 0xd5, 0x44, 0xea, 0xd8, 0xa8, 0x40,
        0xea, 0x10, 0x1f, 0xf5, 0xc3, 0x98, 0x5e, 0xbf, 0xec, 0x14, 0x4f, 0x9c, 0x96, 0xf1, 0x7c,
        0x7f, 0x4a, 0x51, 0x37, 0x31, 0xfc, 0x49, 0xc7, 0x45, 0xf4, 0x18, 0x7b, 0x28, 0xda, 0xa0,
        0x84, 0x5b, 0xca, 0x39, 0x5b, 0x83, 0x78, 0x7e, 0xa2, 0x81, 0xbf, 0x51, 0xf5, 0xf0, 0xc8,
        0x0f, 0x51, 0x09, 0x86, 0x49, 0x02, 0x5b, 0xf2, 0xd2, 0xdf, 0x54, 0xb7, 0x59, 0x9a, 0x06,
        0x50, 0x5c, 0x42, 0xbf, 0x4f, 0x32, 0xdf, 0xbc, 0x5a, 0xf8, 0x49, 0x63, 0x12, 0x17, 0x33,
        0xad, 0x44, 0x60, 0xe8, 0x10, 0x3b, 0xff, 0xa4, 0x8f, 0x51, 0x2a, 0xc2, 0x28, 0x3b, 0x29,
        0xfb, 0x0f, 0xa3, 0xf8, 0x71, 0xfe, 0x11, 0xb8, 0xa4, 0xf3, 0x0f, 0xd5, 0xff, 0xf4, 0xc7,
        0x24, 0x53, 0x63, 0x8f, 0xda, 0x5c, 0x67, 0x57, 0x7b, 0x99, 0xc6, 0xc5, 0x49, 0x04, 0x33,
        0xf2, 0x4e, 0x48, 0x0a, 0xff, 0x76, 0x27, 0xb8, 0x89, 0x80, 0x2a, 0x1f, 0xfb, 0xe6, 0x1a,
        0xd5, 0xf6, 0xb0, 0x79, 0x4b, 0x11, 0xba, 0x54, 0xe3, 0x44, 0xb6, 0xe4, 0xa1, 0xd8, 0x99,
        0x3e, 0x5f, 0x93, 0xcb, 0x61, 0xca, 0x99, 0x1f, 0xb8, 0xe6, 0x5d, 0xf8, 0x6b, 0x77, 0x33,
        0x20, 0x25, 0x41, 0x3c, 0xaa, 0x85, 0x3a, 0x14, 0xc3, 0x67, 0xb5, 0x0d, 0xf5, 0xec, 0x79,
        0x25, 0xb9, 0xa8, 0xd3, 0x18, 0x25, 0xfb, 0x53, 0x4d, 0xf0, 0xe1, 0xf9, 0xcc, 0xcc, 0x60,
        0x92, 0x78, 0x01, 0xb3, 0x24, 0xa6, 0x69, 0x25, 0x9e, 0xad, 0x6b, 0x32, 0x52, 0xc8, 0xb6,
        0x87, 0x47, 0xac, 0xdf, 0x88, 0x80, 0x0a, 0x85, 0x86, 0x18, 0xa7, 0xaf, 0x43, 0x05, 0x4c,
        0xf6, 0x1a, 0x65, 0x5f, 0x50, 0x0f, 0xab, 0x98, 0x62, 0x42, 0x31, 0xec, 0xfc, 0x9b, 0x17,
        0x46,
    ],
    exponent: rsa_exponent_field(RSA_PUB_EXPONENT),
};
pub const PPK_PRIVATE: ImageRsaPrivKey = ImageRsaPrivKey {
    modulus: [
        0x9b, 0x68, 0x5f, 0xd9, 0x4a, 0x24, 0xbc, 0x49, 0x32, 0xa1, 0x3b, 0x23, 0xd9, 0x85, 0x97,
        0x6b, 0x1a, 0xbf, 0x02, 0x76, 0xbd, 0xdd, 0x2c, 0xd5, 0x11, 0x4b, 0x62, 0xe0, 0x63, 0x76,
        0xce, 0x11, 0x8b, 0x74, 0xe7, 0x93, 0xec, 0xb3, 0xb3, 0x1b, 0xec, 0x2d, 0xa2, 0x6c, 0xa7,
        0xe6, 0x28, 0xa6, 0xac, 0xb5, 0xec, 0x46, 0x17, 0x08, 0xb8, 0x58, 0x48, 0x48, 0x27, 0x5b,
        0x07, 0x0d, 0x63, 0x2a, 0xb7, 0xfe, 0x78, 0xa3, 0x6e, 0x0d, 0x01, 0xe4, 0x38, 0xd0, 0xc7,
        0x5e, 0x63, 0xd0, 0xd0, 0xa5, 0xf9, 0xb0, 0x48, 0x44, 0x2f, 0x2f, 0xb2, 0xb8, 0xe7, 0x80,
        0xdb, 0x53, 0x5b, 0xc5, 0x06, 0x3a, 0x90, 0x9d, 0x9a, 0x26, 0xea, 0x69, 0xf4, 0xb7, 0x70,
        0xe3, 0x36, 0x98, 0xce, 0x24, 0xeb, 0x8b, 0x93, 0x73, 0x98, 0x98, 0x43, 0x1d, 0xf1, 0x31,
        0x84, 0xa6, 0x1e, 0x5f, 0xb7, 0x93, 0x34, 0x3f, 0x56, 0xde, 0xdf, 0x2f, 0x0d, 0x7f, 0x89,
        0x41, 0x56, 0xd0, 0x47, 0x83, 0x98, 0xff, 0xd9, 0x65, 0x1c, 0xd6, 0x78, 0xd6, 0x5d, 0x39,
        0x39, 0x5d, 0x78, 0xfb, 0xe8, 0x4a, 0x97, 0x03, 0x24, 0x94, 0x42, 0x0a, 0x47, 0xb4, 0x2b,
        0xa0, 0x48, 0xbe, 0x35, 0xb2, 0x3a, 0xd6, 0x6d, 0x9e, 0xb8, 0xfb, 0xc3, 0xbf, 0xbd, 0x2b,
        0xbe, 0x9f, 0xab, 0xd4, 0x36, 0xc9, 0x79, 0x97, 0xe3, 0x2d, 0xe7, 0x59, 0x4b, 0xb5, 0x4a,
        0x46, 0x58, 0xef, 0x81, 0xa6, 0x8c, 0x95, 0x14, 0x3d, 0xc7, 0xd2, 0x9b, 0x5c, 0x91, 0xe0,
        0x60, 0xc2, 0x54, 0xbe, 0xf1, 0xf4, 0x51, 0xb7, 0x07, 0x4e, 0xbe, 0x03, 0xc9, 0xe4, 0xae,
        0x41, 0xd1, 0xe8, 0xb0, 0x8f, 0x20, 0x9d, 0x2e, 0x60, 0xf1, 0xf6, 0x59, 0xe6, 0x10, 0x5b,
        0x80, 0xdb, 0x74, 0xd9, 0x49, 0x08, 0xe1, 0x2c, 0x97, 0x1c, 0xfd, 0x8b, 0x2f, 0x80, 0x7d,
        0xda,
    ],
    priv_exponent: [
        0xf9, 0x31, 0xd5, 0x53, 0xc4, 0x50, 0xa1, 0x99, 0x39, 0x78, 0x58, 0x84, 0x62, 0xdc, 0x3a,
        0x06, 0x6c, 0xb5, 0x29, 0x35, 0xd8, 0xc5, 0x64, 0x4d, 0xc6, 0x23, 0x1b, 0xe6, 0x19, 0x5c,
        0x7f, 0xdf, 0x65, 0xc3, 0xa3, 0x7c, 0xf0, 0x36, 0x96, 0x32, 0x1b, 0x85, 0x37, 0xc3, 0x9b,
        0x70, 0xac, 0xb7, 0x46, 0xf1, 0xf1, 0xa8, 0xd7, 0x49, 0x2d, 0x5f, 0xdf, 0x10, 0x52, 0x17,
        0x27, 0x8e, 0x20, 0x27, 0x83, 0x7e, 0x09, 0xd8, 0x2b, 0x3a, 0x36, 0x82, 0xb3, 0x29, 0x3a,
        0x10, 0x62, 0xf3, 0x66, 0x8e, 0x65, 0x2c, 0xc6, 0x63, 0x1b, 0xf3, 0x11, 0x37, 0xa2, 0x28,
        0x5a, 0xa8, 0x5d, 0xf9, 0x42, 0x0d, 0x10, 0xf9, 0x9f, 0x85, 0x5c, 0xaf, 0xc5, 0x50, 0x6a,
        0x5a, 0x95, 0xba, 0x35, 0x41, 0x2a, 0xb2, 0x4c, 0x8f, 0x9c, 0x4b, 0xad, 0x96, 0xaf, 0xf1,
        0x4f, 0xca, 0x96, 0xc9, 0xd5, 0x49, 0x12, 0x7f, 0xe6, 0x5f, 0xc5, 0xa5, 0x46, 0x4b, 0x04,
        0xed, 0xe0, 0xf7, 0x0e, 0x67, 0x57, 0x5d, 0x50, 0xb2, 0x72, 0x9f, 0xb1, 0x93, 0x7b, 0x6b,
        0xf1, 0xe1, 0xcf, 0x78, 0xa2, 0xad, 0x9f, 0x46, 0x13, 0xff, 0xb7, 0x9b, 0x7a, 0x04, 0x7b,
        0x65, 0x92, 0xb3, 0x39, 0xcb, 0x14, 0x6e, 0x59, 0xec, 0x72, 0x01, 0xad, 0xdf, 0xf5, 0x3e,
        0x4d, 0x5d, 0xa2, 0x2c, 0x9d, 0x45, 0x4e, 0x6c, 0xe9, 0x5b, 0x98, 0x56, 0xeb, 0x12, 0x28,
        0x51, 0x63, 0x73, 0x93, 0x50, 0x20, 0x96, 0x79, 0x24, 0xa4, 0x37, 0x70, 0x18, 0x09, 0xeb,
        0x5a, 0x9f, 0xe2, 0xa5, 0x16, 0xc6, 0xcb, 0xaf, 0x7a, 0x47, 0xb4, 0x2a, 0x1f, 0x07, 0x97,
        0x76, 0x47, 0x12, 0x89, 0x13, 0xf7, 0x54, 0x13, 0x88, 0xb9, 0xaa, 0xe3, 0xa1, 0xaf, 0x21,
        0xa8, 0x63, 0x73, 0x62, 0x6f, 0xa9, 0x7b, 0xa8, 0x12, 0x64, 0xf5, 0x40, 0xa7, 0x30, 0x2b,
        0xa5,
    ],
};
pub const SPK_PUBLIC: ImageRsaPubKey = ImageRsaPubKey {
    modulus: [
        0x45, 0x01, 0x28, 0xc6, 0xdd, 0x16, 0xa8, 0x5a, 0x68, 0xfb, 0xd7, 0xb2, 0xdd, 0x21, 0xc4,
        0xc8, 0x9d, 0x50, 0x14, 0x13, 0xe4, 0x80, 0xa3, 0x32, 0x12, 0x3c, 0xb5, 0x48, 0x09, 0x7b,
        0x07, 0xd8, 0x26, 0xc9, 0xc8, 0xd2, 0xbc, 0xa0, 0x9d, 0x69, 0xf8, 0x60, 0x13, 0xa4, 0x97,
        0x84, 0x80, 0xf0, 0x8b, 0x58, 0xf3, 0x2e, 0x2a, 0xd5, 0x19, 0x0e, 0x40, 0xf1, 0x54, 0xf2,
        0x5d, 0xe8, 0xe9, 0x3a, 0xbe, 0x92, 0xfc, 0x78, 0x1a, 0x49, 0xb5, 0xd3, 0xa7, 0xfd, 0xd6,
        0x27, 0x68, 0x3b, 0x5b, 0x58, 0xd6, 0x59, 0x37, 0x82, 0xf3, 0x55, 0x8a, 0x7b, 0x7d, 0x7a,
        0x4a, 0x7f, 0x2b, 0x0d, 0xe1, 0xc8, 0xfc, 0xf7, 0x6a, 0xde, 0xe6, 0x1e, 0x28, 0xf8, 0x6d,
        0x8e, 0x63, 0x4e, 0x2b, 0x12, 0x0a, 0x2e, 0x9a, 0x4f, 0x75, 0x8a, 0xd4, 0xb6, 0xcd, 0x83,
        0x70, 0x30, 0x4c, 0x26, 0xba, 0x14, 0x3f, 0xb6, 0xb0, 0x7c, 0x03, 0x63, 0x29, 0xda, 0xbc,
        0x87, 0x2a, 0xb4, 0x5c, 0x74, 0xd8, 0x42, 0x0c, 0xe9, 0xc5, 0x17, 0x24, 0x7c, 0x4b, 0x5f,
        0xf9, 0xca, 0x7c, 0xe5, 0xa1, 0x05, 0xe0, 0xa7, 0x8a, 0x89, 0xb8, 0x05, 0x53, 0x1d, 0x91,
        0x50, 0xe4, 0xea, 0x56, 0x77, 0xee, 0xd6, 0x2e, 0xf2, 0x42, 0x16, 0xb9, 0x3b, 0x33, 0x33,
        0xbd, 0x09, 0x45, 0x8f, 0x27, 0xf0, 0x75, 0x85, 0x1e, 0x46, 0x75, 0x71, 0xa4, 0x65, 0x14,
        0x7f, 0xbd, 0xe4, 0xa3, 0xba, 0x13, 0xe0, 0x07, 0xf8, 0x7e, 0x7e, 0xcc, 0x3f, 0xa2, 0x99,
        0x4b, 0x11, 0x8b, 0xa3, 0x55, 0x34, 0x6f, 0x4e, 0x3c, 0x72, 0x3a, 0xf0, 0xc7, 0x55, 0xfe,
        0x32, 0x54, 0x4a, 0x4a, 0x29, 0x6e, 0x85, 0x92, 0x48, 0x7f, 0x5b, 0x66, 0xa4, 0x47, 0x2d,
        0x15, 0x3d, 0x92, 0x9e, 0x9d, 0x61, 0xc8, 0x82, 0xfc, 0xec, 0xac, 0xed, 0xcf, 0x0d, 0x55,
        0xea,
    ],
    modulus_ext: [
        0xb1, 0x12, 0x73, 0x81, 0xdf, 0x41, 0x30, 0x19, 0x48, 0x01, 0xcd, 0x40, 0x78, 0x83, 0x95,
        0x37, 0x1c, 0x96, 0xcf, 0x93, 0x56, 0xe9, 0x5d, 0xcc, 0x69, 0x43, 0x3a, 0xfa, 0xfb, 0x0a,
        0x39, 0xb3, 0x1f, 0x07, 0x85, 0x03, 0xce, 0x3b, 0x1a, 0x8c, 0x69, 0xa3, 0xae, 0xd0, 0x72,
        0x89, 0xd1, 0x25, 0x27, 0x42, 0x84, 0x34, 0x68, 0x3e, 0xcf, 0xa8, 0x35, 0xbc, 0x8d, 0xf9,
        0x82, 0xa6, 0xe7, 0x6f, 0xc2, 0x74, 0x05, 0x58, 0x26, 0x2e, 0x40, 0x11, 0x99, 0x5c, 0x3b,
        0xfa, 0x42, 0x33, 0xa8, 0x9d, 0x0d, 0xf6, 0x64, 0x42, 0x7e, 0x8f, 0x5b, 0xbe, 0x9d, 0xd4,
        0x21, 0x80, 0x57, 0xa9, 0xdd, 0xe5, 0x74, 0x6f, 0xdf, 0x54, 0xf1, 0x6f, 0xcd, 0x5f, 0x7d,
        0xac, 0x6f, 0xff, 0x0a, 0x8e, 0xe1, 0xa1, 0x65, 0x02, 0xdf, 0x91, 0x43, 0xcb, 0xf1, 0x89,
        0x9c, 0x7b, 0xf3, 0x60, 0x45, 0x73, 0x3f, 0x9f, 0x8e, 0x6f, 0x01, 0x80, 0x13, 0xc1, 0xbf,
        0xe8, 0x66, 0x58, 0xa2, 0xd1, 0x03, 0x4e, 0xc2, 0x7a, 0xb8, 0x73, 0xc7, 0x4e, 0xbb, 0x02,
        0x99, 0x27, 0xef, 0x12, 0x1b, 0x29, 0x77, 0xae, 0xfd, 0x99, 0x55, 0x1b, 0xf8, 0x6f, 0x24,
        0x10, 0x59, 0xbd, 0xef, 0xae, 0x10, 0x22, 0x90, 0x2a, 0x3e, 0x49, 0x17, 0x96, 0x52, 0x90,
        0x23, 0x39, 0xa3, 0x9b, 0xa3, 0x9d, 0xbd, 0xc7, 0x7d, 0xb8, 0x96, 0x6a, 0xf9, 0xaf, 0xbe,
        0x33, 0x59, 0x03, 0x77, 0xc2, 0x3e, 0x1f, 0x51, 0xa8, 0x08, 0x66, 0xc4, 0x87, 0x26, 0xcf,
        0xef, 0xdd, 0x23, 0xc7, 0x90, 0xa8, 0x3d, 0x8d, 0x6d, 0x86, 0x36, 0xc7, 0x60, 0x76, 0x00,
        0x30, 0x86, 0xee, 0x6e, 0xf1, 0x75, 0xee, 0x83, 0x06, 0xb6, 0x39, 0x7e, 0x77, 0xa3, 0x9c,
        0xbf, 0x63, 0x7d, 0x5f, 0x3a, 0x24, 0x8c, 0x84, 0xcb, 0x61, 0xaa, 0xf5, 0xf3, 0x53, 0x57,
        0xc8,
    ],
    exponent: rsa_exponent_field(RSA_PUB_EXPONENT),
};
pub const SPK_PRIVATE: ImageRsaPrivKey = ImageRsaPrivKey {
    modulus: [
        0x45, 0x01, 0x28, 0xc6, 0xdd, 0x16, 0xa8, 0x5a, 0x68, 0xfb, 0xd7, 0xb2, 0xdd, 0x21, 0xc4,
        0xc8, 0x9d, 0x50, 0x14, 0x13, 0xe4, 0x80, 0xa3, 0x32, 0x12, 0x3c, 0xb5, 0x48, 0x09, 0x7b,
        0x07, 0xd8, 0x26, 0xc9, 0xc8, 0xd2, 0xbc, 0xa0, 0x9d, 0x69, 0xf8, 0x60, 0x13, 0xa4, 0x97,
        0x84, 0x80, 0xf0, 0x8b, 0x58, 0xf3, 0x2e, 0x2a, 0xd5, 0x19, 0x0e, 0x40, 0xf1, 0x54, 0xf2,
        0x5d, 0xe8, 0xe9, 0x3a, 0xbe, 0x92, 0xfc, 0x78, 0x1a, 0x49, 0xb5, 0xd3, 0xa7, 0xfd, 0xd6,
        0x27, 0x68, 0x3b, 0x5b, 0x58, 0xd6, 0x59, 0x37, 0x82, 0xf3, 0x55, 0x8a, 0x7b, 0x7d, 0x7a,
        0x4a, 0x7f, 0x2b, 0x0d, 0xe1, 0xc8, 0xfc, 0xf7, 0x6a, 0xde, 0xe6, 0x1e, 0x28, 0xf8, 0x6d,
        0x8e, 0x63, 0x4e, 0x2b, 0x12, 0x0a, 0x2e, 0x9a, 0x4f, 0x75, 0x8a, 0xd4, 0xb6, 0xcd, 0x83,
        0x70, 0x30, 0x4c, 0x26, 0xba, 0x14, 0x3f, 0xb6, 0xb0, 0x7c, 0x03, 0x63, 0x29, 0xda, 0xbc,
        0x87, 0x2a, 0xb4, 0x5c, 0x74, 0xd8, 0x42, 0x0c, 0xe9, 0xc5, 0x17, 0x24, 0x7c, 0x4b, 0x5f,
        0xf9, 0xca, 0x7c, 0xe5, 0xa1, 0x05, 0xe0, 0xa7, 0x8a, 0x89, 0xb8, 0x05, 0x53, 0x1d, 0x91,
        0x50, 0xe4, 0xea, 0x56, 0x77, 0xee, 0xd6, 0x2e, 0xf2, 0x42, 0x16, 0xb9, 0x3b, 0x33, 0x33,
        0xbd, 0x09, 0x45, 0x8f, 0x27, 0xf0, 0x75, 0x85, 0x1e, 0x46, 0x75, 0x71, 0xa4, 0x65, 0x14,
        0x7f, 0xbd, 0xe4, 0xa3, 0xba, 0x13, 0xe0, 0x07, 0xf8, 0x7e, 0x7e, 0xcc, 0x3f, 0xa2, 0x99,
        0x4b, 0x11, 0x8b, 0xa3, 0x55, 0x34, 0x6f, 0x4e, 0x3c, 0x72, 0x3a, 0xf0, 0xc7, 0x55, 0xfe,
        0x32, 0x54, 0x4a, 0x4a, 0x29, 0x6e, 0x85, 0x92, 0x48, 0x7f, 0x5b, 0x66, 0xa4, 0x47, 0x2d,
        0x15, 0x3d, 0x92, 0x9e, 0x9d, 0x61, 0xc8, 0x82, 0xfc, 0xec, 0xac, 0xed, 0xcf, 0x0d, 0x55,
        0xea,
    ],
    priv_exponent: [
        0x01, 0x0b, 0x21, 0xe7, 0xf7, 0xb1, 0xa5, 0x3f, 0xba, 0x5f, 0x12, 0xf1, 0x89, 0x2e, 0x5f,
        0xf3, 0x00, 0xea, 0x1d, 0x0f, 0x20, 0x26, 0x35, 0x1d, 0x58, 0x0d, 0xeb, 0xd3, 0xa6, 0x4f,
        0xac, 0x4a, 0x65, 0x5c, 0x89, 0x2b, 0xe4, 0x12, 0xcd, 0x07, 0xc7, 0x0a, 0xa2, 0x3a, 0xba,
        0x02, 0x96, 0x47, 0xde, 0x9e, 0x9e, 0x32, 0xb0, 0x11, 0x96, 0xe3, 0x1d, 0x03, 0xdd, 0xf0,
        0x03, 0xe9, 0xe5, 0x23, 0xb3, 0x89, 0x70, 0xc0, 0xee, 0x3c, 0x4c, 0x32, 0x68, 0xf4, 0x2d,
        0xff, 0xf0, 0x56, 0xaf, 0xe5, 0x31, 0x7b, 0x1f, 0x36, 0x2e, 0xc4, 0x87, 0xff, 0x6a, 0x64,
        0x94, 0xb1, 0xdb, 0xec, 0x1d, 0x8a, 0x3c, 0xc3, 0x4d, 0xa7, 0x2e, 0x5d, 0x13, 0xbb, 0xdc,
        0xff, 0xf4, 0x12, 0xd2, 0x21, 0x1d, 0xd5, 0x6a, 0x03, 0x71, 0x62, 0x8c, 0xcb, 0x5b, 0x35,
        0x90, 0xb8, 0x90, 0x38, 0x97, 0x78, 0x08, 0x47, 0x9a, 0x0b, 0x46, 0xce, 0xa2, 0xa1, 0xd0,
        0xe8, 0x78, 0xb7, 0x15, 0x24, 0x07, 0xc8, 0x3f, 0xdb, 0x6b, 0x24, 0xe7, 0x9a, 0xa5, 0xa0,
        0x05, 0x21, 0x47, 0x50, 0x3f, 0x7c, 0x25, 0x3f, 0x81, 0x8c, 0x5e, 0xe4, 0xd3, 0x61, 0x17,
        0x0e, 0x74, 0x03, 0x94, 0x1b, 0xd4, 0x13, 0x2d, 0xa5, 0x3f, 0x31, 0x6a, 0x14, 0x52, 0x8a,
        0xc7, 0xb5, 0x56, 0xa3, 0xbc, 0x32, 0x37, 0x1d, 0xb3, 0xc6, 0xcc, 0x22, 0x90, 0x32, 0xae,
        0xd7, 0x23, 0x56, 0x6f, 0xea, 0xc5, 0xf8, 0xfd, 0xc5, 0xf4, 0x3a, 0x43, 0xbc, 0xad, 0x46,
        0xa4, 0x86, 0x87, 0x04, 0x43, 0x95, 0x05, 0xec, 0x3c, 0xea, 0x17, 0x4d, 0x67, 0x6b, 0xc8,
        0x53, 0xf1, 0xe7, 0x57, 0x1b, 0x09, 0x85, 0xdc, 0xc3, 0x9d, 0xad, 0x03, 0xff, 0xca, 0x6b,
        0xbd, 0x96, 0x90, 0x06, 0x3b, 0x32, 0x96, 0x0a, 0x37, 0x1b, 0x94, 0x56, 0x61, 0x32, 0x31,
        0x8d,
    ],
};
pub const PPK_ALT_PUBLIC: ImageRsaPubKey = ImageRsaPubKey {
    modulus: [
        0xd5, 0x83, 0x44, 0x8a, 0x76, 0x30, 0xa4, 0xaa, 0xd7, 0x91, 0xb9, 0x05, 0xb7, 0x41, 0x68,
        0xfd, 0xcb, 0x60, 0xce, 0xc8, 0x28, 0xca, 0x70, 0xbe, 0x6f, 0x4c, 0xa3, 0x32, 0x3b, 0x64,
        0x49, 0x95, 0xf1, 0xc2, 0x22, 0x47, 0xe9, 0xc1, 0xec, 0x81, 0x6c, 0x58, 0xba, 0x95, 0x71,
        0x12, 0x35, 0x6a, 0x07, 0x89, 0xe0, 0xe2, 0x30, 0x2a, 0x09, 0x46, 0x49, 0x13, 0x4e, 0x00,
        0x0c, 0xa1, 0x58, 0xd7, 0xb0, 0xfa, 0x5c, 0x09, 0x23, 0xe8, 0x2a, 0x4a, 0x25, 0xf9, 0x06,
        0x4f, 0x68, 0x50, 0x17, 0x19, 0xd1, 0x2f, 0x3b, 0x32, 0x97, 0xd1, 0x1b, 0x7a, 0xb8, 0x5e,
        0x1e, 0x99, 0xde, 0xee, 0x40, 0x73, 0x95, 0x5d, 0x28, 0x9b, 0x36, 0x01, 0xc0, 0x4c, 0x0f,
        0xdf, 0x71, 0x70, 0xb8, 0xfd, 0x2c, 0x0c, 0x93, 0x45, 0x86, 0x6e, 0xe4, 0x42, 0xa4, 0x8e,
        0x41, 0xb8, 0x61, 0xc2, 0xc3, 0xe0, 0xd4, 0x81, 0x3a, 0xdd, 0x2e, 0xd4, 0x2f, 0xc9, 0x9f,
        0x97, 0x9f, 0xbc, 0x4b, 0xbb, 0x53, 0x55, 0x86, 0x38, 0x9f, 0xc9, 0x15, 0x1c, 0x2a, 0x11,
        0xf6, 0x13, 0xda, 0xac, 0x56, 0xf1, 0x7c, 0x74, 0x8e, 0xe8, 0x64, 0xbb, 0xb5, 0x70, 0x63,
        0xa3, 0x9b, 0x4d, 0x21, 0x8b, 0xe1, 0x9c, 0xdd, 0x32, 0xa4, 0xe0, 0x6e, 0x07, 0x78, 0xb7,
        0x30, 0x5a, 0x93, 0x0a, 0x3c, 0x5b, 0xb8, 0xa5, 0x39, 0x2b, 0x77, 0x72, 0xe6, 0x3c, 0x29,
        0x2e, 0x7f, 0x1e, 0x4d, 0x54, 0x50, 0x18, 0x5a, 0x5c, 0xcc, 0x4c, 0xbf, 0xf3, 0xd5, 0x60,
        0xd2, 0xd4, 0x90, 0x71, 0xf5, 0x33, 0xf3, 0x7d, 0x21, 0x1d, 0x66, 0x91, 0x48, 0x6d, 0xc5,
        0x85, 0xb2, 0xc3, 0xf6, 0xc7, 0x22, 0xae, 0x14, 0xe3, 0x36, 0x37, 0x82, 0x77, 0x01, 0xd8,
        0x17, 0xe1, 0x22, 0xfe, 0x53, 0xd3, 0x11, 0xe3, 0xff, 0x72, 0x10, 0x4c, 0x97, 0x28, 0x2b,
        0xf6,
    ],
    modulus_ext: [
        0x21, 0x74, 0x9f, 0x6f, 0x90, 0x27, 0xb0, 0xba, 0xb7, 0x05, 0x2a, 0x2d, 0xd2, 0x07, 0x8c,
        0x42, 0xbf, 0x31, 0x79, 0x95, 0x17, 0xcc, 0x34, 0x67, 0xed, 0x42, 0x9e, 0xea, 0x2a, 0x3b,
        0x09, 0x37, 0xa9, 0x0f, 0x98, 0x19, 0x85, 0x06, 0x94, 0x5b, 0x51, 0x42, 0x93, 0xfd, 0xed,
        0x0a, 0x81, 0x9c, 0x1a, 0x6d, 0xd2, 0xf5, 0xee, 0x9d, 0x89, 0xcf, 0xb5, 0xb2, 0x5a, 0x57,
        0x30, 0x12, 0xdc, 0xbe, 0x74, 0xb7, 0x9c, 0xa2, 0x80, 0x21, 0x1f, 0x9f, 0xd5, 0xc4, 0x81,
        0x1c, 0xa1, 0xd1, 0x01, 0x19, 0x54, 0xb2, 0xd7, 0x4d, 0x16, 0xa0, 0x86, 0x8f, 0xc9, 0x96,
        0xbd, 0xa0, 0xbc, 0xb1, 0xfd, 0x34, 0x20, 0x66, 0x64, 0x9f, 0xf0, 0x10, 0xf1, 0x30, 0x14,
        0x7f, 0xd5, 0xe9, 0x92, 0xac, 0x47, 0x6e, 0xae, 0xad, 0xf6, 0x1d, 0xc0, 0x8d, 0x47, 0xf8,
        0x7a, 0x93, 0xac, 0xa0, 0xf2, 0x39, 0xc5, 0x2a, 0x7c, 0x81, 0xbf, 0xad, 0x29, 0xe4, 0xe1,
        0xbe, 0xa1, 0xae, 0x5a, 0x05, 0x0a, 0x34, 0xbc, 0xa6, 0x36, 0x1c, 0x89, 0x51, 0x7e, 0x37,
        0x32, 0xee, 0x68, 0xef, 0xf3, 0xf8, 0x2d, 0xe5, 0x36, 0xe5, 0xa6, 0x38, 0xff, 0xbe, 0xeb,
        0xd4, 0x6b, 0xba, 0x11, 0x9a, 0x7e, 0xc4, 0xcb, 0x1b, 0x6a, 0xc6, 0x9a, 0xd1, 0x08, 0xcb,
        0xed, 0x76, 0x5e, 0xe3, 0xc9, 0x88, 0x85, 0x10, 0xc9, 0xf2, 0x56, 0xa6, 0x09, 0x9e, 0xcb,
        0xb2, 0x4f, 0x38, 0xfb, 0x85, 0x1f, 0x38, 0x7a, 0x6e, 0x58, 0xae, 0xdb, 0x01, 0x8a, 0xab,
        0x8a, 0x48, 0x1d, 0x6c, 0x89, 0xde, 0x67, 0x23, 0x4f, 0x19, 0x37, 0x39, 0x7f, 0x95, 0x22,
        0x87, 0xb6, 0x38, 0x78, 0x49, 0xaf, 0xca, 0x21, 0x6a, 0x48, 0x1f, 0xae, 0x3d, 0xd4, 0x79,
        0x7b, 0x4a, 0x3f, 0x2d, 0xc6, 0xcf, 0x65, 0xd4, 0x53, 0xc6, 0x76, 0xfa, 0x4c, 0xae, 0xb9,
        0x93,
    ],
    exponent: rsa_exponent_field(RSA_PUB_EXPONENT),
};
pub const PPK_ALT_PRIVATE: ImageRsaPrivKey = ImageRsaPrivKey {
    modulus: [
        0xd5, 0x83, 0x44, 0x8a, 0x76, 0x30, 0xa4, 0xaa, 0xd7, 0x91, 0xb9, 0x05, 0xb7, 0x41, 0x68,
        0xfd, 0xcb, 0x60, 0xce, 0xc8, 0x28, 0xca, 0x70, 0xbe, 0x6f, 0x4c, 0xa3, 0x32, 0x3b, 0x64,
        0x49, 0x95, 0xf1, 0xc2, 0x22, 0x47, 0xe9, 0xc1, 0xec, 0x81, 0x6c, 0x58, 0xba, 0x95, 0x71,
        0x12, 0x35, 0x6a, 0x07, 0x89, 0xe0, 0xe2, 0x30, 0x2a, 0x09, 0x46, 0x49, 0x13, 0x4e, 0x00,
        0x0c, 0xa1, 0x58, 0xd7, 0xb0, 0xfa, 0x5c, 0x09, 0x23, 0xe8, 0x2a, 0x4a, 0x25, 0xf9, 0x06,
        0x4f, 0x68, 0x50, 0x17, 0x19, 0xd1, 0x2f, 0x3b, 0x32, 0x97, 0xd1, 0x1b, 0x7a, 0xb8, 0x5e,
        0x1e, 0x99, 0xde, 0xee, 0x40, 0x73, 0x95, 0x5d, 0x28, 0x9b, 0x36, 0x01, 0xc0, 0x4c, 0x0f,
        0xdf, 0x71, 0x70, 0xb8, 0xfd, 0x2c, 0x0c, 0x93, 0x45, 0x86, 0x6e, 0xe4, 0x42, 0xa4, 0x8e,
        0x41, 0xb8, 0x61, 0xc2, 0xc3, 0xe0, 0xd4, 0x81, 0x3a, 0xdd, 0x2e, 0xd4, 0x2f, 0xc9, 0x9f,
        0x97, 0x9f, 0xbc, 0x4b, 0xbb, 0x53, 0x55, 0x86, 0x38, 0x9f, 0xc9, 0x15, 0x1c, 0x2a, 0x11,
        0xf6, 0x13, 0xda, 0xac, 0x56, 0xf1, 0x7c, 0x74, 0x8e, 0xe8, 0x64, 0xbb, 0xb5, 0x70, 0x63,
        0xa3, 0x9b, 0x4d, 0x21, 0x8b, 0xe1, 0x9c, 0xdd, 0x32, 0xa4, 0xe0, 0x6e, 0x07, 0x78, 0xb7,
        0x30, 0x5a, 0x93, 0x0a, 0x3c, 0x5b, 0xb8, 0xa5, 0x39, 0x2b, 0x77, 0x72, 0xe6, 0x3c, 0x29,
        0x2e, 0x7f, 0x1e, 0x4d, 0x54, 0x50, 0x18, 0x5a, 0x5c, 0xcc, 0x4c, 0xbf, 0xf3, 0xd5, 0x60,
        0xd2, 0xd4, 0x90, 0x71, 0xf5, 0x33, 0xf3, 0x7d, 0x21, 0x1d, 0x66, 0x91, 0x48, 0x6d, 0xc5,
        0x85, 0xb2, 0xc3, 0xf6, 0xc7, 0x22, 0xae, 0x14, 0xe3, 0x36, 0x37, 0x82, 0x77, 0x01, 0xd8,
        0x17, 0xe1, 0x22, 0xfe, 0x53, 0xd3, 0x11, 0xe3, 0xff, 0x72, 0x10, 0x4c, 0x97, 0x28, 0x2b,
        0xf6,
    ],
    priv_exponent: [
        0xc1, 0x57, 0xc8, 0x2c, 0xb6, 0xec, 0x97, 0x05, 0x23, 0x6a, 0x53, 0xd3, 0xd5, 0x60, 0x60,
        0x93, 0x90, 0xec, 0xab, 0x0d, 0x82, 0x3b, 0xe5, 0x12, 0x54, 0x62, 0x68, 0x64, 0xfe, 0xff,
        0x50, 0xc5, 0x3a, 0x4f, 0xd7, 0x49, 0x11, 0x94, 0xfa, 0x5e, 0x36, 0x92, 0x15, 0x74, 0xbf,
        0x04, 0x5f, 0x6f, 0x46, 0xcc, 0x2b, 0x4f, 0x71, 0x51, 0x2b, 0x3d, 0x9b, 0x60, 0x7e, 0x41,
        0xfb, 0x29, 0xf2, 0x56, 0x4c, 0x71, 0x52, 0x3a, 0x02, 0xf3, 0xef, 0x9e, 0x3b, 0xf7, 0xcb,
        0xcf, 0x2a, 0x5f, 0x8f, 0x0f, 0xdd, 0x54, 0xdc, 0xa7, 0x9e, 0xa7, 0x7e, 0xf0, 0x17, 0x60,
        0xe8, 0x49, 0x54, 0x9d, 0x0d, 0xa6, 0xae, 0x5a, 0x42, 0x53, 0xe6, 0xeb, 0x34, 0x07, 0x1f,
        0xa9, 0x85, 0xd5, 0x90, 0x2c, 0x8c, 0xd0, 0xb8, 0x57, 0x85, 0xf1, 0x36, 0xaf, 0x0b, 0x18,
        0x61, 0x08, 0xb7, 0x3a, 0x78, 0x2a, 0x68, 0xa9, 0xcb, 0x09, 0xbc, 0x0d, 0x2f, 0xd4, 0x77,
        0xdf, 0xfe, 0x3d, 0xd7, 0x27, 0x32, 0x23, 0xc4, 0x8a, 0xef, 0xae, 0x6b, 0xaf, 0xa5, 0x0b,
        0xec, 0xa8, 0x3e, 0x50, 0x2f, 0x1c, 0x85, 0xf0, 0xbd, 0x63, 0x12, 0x5b, 0x4b, 0x8b, 0x6d,
        0x0f, 0xa5, 0xde, 0x43, 0x98, 0x19, 0x1a, 0xc3, 0xb6, 0x8d, 0xac, 0xb2, 0x23, 0x11, 0xfe,
        0x75, 0xd9, 0x02, 0x6d, 0x53, 0x07, 0x5d, 0x3d, 0xf5, 0x48, 0xcb, 0x7f, 0xd7, 0xa1, 0x47,
        0x02, 0x71, 0x52, 0x37, 0x6b, 0x28, 0xf0, 0xd5, 0x4a, 0xbc, 0x05, 0x62, 0xdd, 0xd4, 0xd5,
        0x32, 0x73, 0x24, 0xbe, 0xc6, 0xce, 0x9d, 0x5d, 0xb0, 0xdc, 0x86, 0xd6, 0x76, 0x64, 0x4c,
        0x1d, 0x78, 0x19, 0x0c, 0x77, 0x95, 0xfb, 0xa9, 0xf8, 0xbb, 0xda, 0xa3, 0x64, 0x3b, 0x3f,
        0xfb, 0x3e, 0xf8, 0xe3, 0x79, 0x0e, 0x27, 0x0b, 0x0f, 0x88, 0xc0, 0xbe, 0x93, 0xd3, 0xde,
        0x9f,
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    const KEYS: [(&ImageRsaPubKey, &ImageRsaPrivKey); 3] = [
        (&PPK_PUBLIC, &PPK_PRIVATE),
        (&SPK_PUBLIC, &SPK_PRIVATE),
        (&PPK_ALT_PUBLIC, &PPK_ALT_PRIVATE),
    ];

    #[test]
    fn test_modulus_ext() {
        for (public, _) in KEYS {
            let n = BigUint::from_bytes_le(&public.modulus);
            let r_squared = BigUint::from(1u32) << 4096;
            assert_eq!(
                BigUint::from_bytes_le(&public.modulus_ext),
                r_squared % &n
            );
        }
    }

    #[test]
    fn test_key_pairs_match() {
        let message = BigUint::from(0x1234_5678_9abc_def0u64);
        for (public, private) in KEYS {
            assert_eq!(public.modulus, private.modulus);
            assert_eq!(public.exponent_value(), RSA_PUB_EXPONENT);

            let n = BigUint::from_bytes_le(&private.modulus);
            let d = BigUint::from_bytes_le(&private.priv_exponent);
            let sig = message.modpow(&d, &n);
            assert_eq!(sig.modpow(&BigUint::from(RSA_PUB_EXPONENT), &n), message);
        }
    }

    #[test]
    fn test_keys_distinct() {
        assert_ne!(PPK_PUBLIC.modulus, SPK_PUBLIC.modulus);
        assert_ne!(PPK_PUBLIC.modulus, PPK_ALT_PUBLIC.modulus);
        assert_ne!(SPK_PUBLIC.modulus, PPK_ALT_PUBLIC.modulus);
    }
}
