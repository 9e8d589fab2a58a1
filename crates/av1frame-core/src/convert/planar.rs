//! Planar 4:2:0 extraction.
//!
//! Copies the three planes of a decoded picture into a single tightly
//! packed buffer (Y plane, then U, then V), removing whatever stride
//! padding the decode engine added. Sample values are copied unchanged.

use super::types::{ConvertError, PictureView};
use super::PlanarFrame;

/// Extract a decoded picture into a tightly packed planar 4:2:0 buffer.
///
/// The output holds the full-resolution Y plane followed by the U and V
/// planes at half resolution (rounded up for odd dimensions), each with
/// no row padding. Total size is
/// `w * h + 2 * ceil(w / 2) * ceil(h / 2)` bytes.
///
/// # Errors
///
/// Returns `ConvertError::Allocation` if the output buffer cannot be
/// allocated; no partial buffer is exposed.
pub fn extract_planar(picture: &PictureView<'_>) -> Result<PlanarFrame, ConvertError> {
    let width = picture.width() as usize;
    let height = picture.height() as usize;
    let chroma_size = picture.chroma_width() as usize * picture.chroma_height() as usize;
    let total = width * height + 2 * chroma_size;

    let mut data = Vec::new();
    data.try_reserve_exact(total)
        .map_err(|_| ConvertError::Allocation { requested: total })?;

    for row in 0..height {
        data.extend_from_slice(picture.y_row(row));
    }
    for row in 0..picture.chroma_height() as usize {
        data.extend_from_slice(picture.u_row(row));
    }
    for row in 0..picture.chroma_height() as usize {
        data.extend_from_slice(picture.v_row(row));
    }

    Ok(PlanarFrame {
        width: picture.width(),
        height: picture.height(),
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::super::types::Plane;
    use super::*;

    /// Lay out tightly packed rows into a strided plane buffer.
    fn pad_plane(tight: &[u8], rows: usize, row_len: usize, stride: usize) -> Vec<u8> {
        let mut padded = vec![0xAA; rows * stride];
        for row in 0..rows {
            padded[row * stride..row * stride + row_len]
                .copy_from_slice(&tight[row * row_len..(row + 1) * row_len]);
        }
        padded
    }

    fn view<'a>(
        width: u32,
        height: u32,
        y: &'a [u8],
        y_stride: usize,
        u: &'a [u8],
        v: &'a [u8],
        c_stride: usize,
    ) -> PictureView<'a> {
        PictureView::new(
            width,
            height,
            Plane {
                data: y,
                stride: y_stride,
            },
            Plane {
                data: u,
                stride: c_stride,
            },
            Plane {
                data: v,
                stride: c_stride,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_extract_removes_stride_padding() {
        // 4x2 picture: 8 luma samples, 2x1 chroma planes.
        let y_tight: Vec<u8> = (10u8..18).collect();
        let u_tight = vec![60, 61];
        let v_tight = vec![70, 71];

        let y = pad_plane(&y_tight, 2, 4, 16);
        let u = pad_plane(&u_tight, 1, 2, 8);
        let v = pad_plane(&v_tight, 1, 2, 8);

        let frame = extract_planar(&view(4, 2, &y, 16, &u, &v, 8)).unwrap();

        assert_eq!(frame.width, 4);
        assert_eq!(frame.height, 2);
        assert_eq!(frame.data.len(), 4 * 2 + 2 * 2);
        assert_eq!(frame.y_plane(), &y_tight[..]);
        assert_eq!(frame.u_plane(), &u_tight[..]);
        assert_eq!(frame.v_plane(), &v_tight[..]);
    }

    #[test]
    fn test_extract_without_padding_is_identity() {
        let y: Vec<u8> = (0u8..16).collect();
        let u = vec![1, 2, 3, 4];
        let v = vec![5, 6, 7, 8];

        let frame = extract_planar(&view(4, 4, &y, 4, &u, &v, 2)).unwrap();

        let mut expected = y.clone();
        expected.extend_from_slice(&u);
        expected.extend_from_slice(&v);
        assert_eq!(frame.data, expected);
    }

    #[test]
    fn test_extract_odd_dimensions_round_chroma_up() {
        // 3x3 picture: chroma planes are 2x2.
        let y: Vec<u8> = (0u8..9).collect();
        let u = vec![10, 11, 12, 13];
        let v = vec![20, 21, 22, 23];

        let frame = extract_planar(&view(3, 3, &y, 3, &u, &v, 2)).unwrap();

        assert_eq!(frame.data.len(), 3 * 3 + 2 * (2 * 2));
        assert_eq!(frame.y_plane(), &y[..]);
        assert_eq!(frame.u_plane(), &u[..]);
        assert_eq!(frame.v_plane(), &v[..]);
    }

    #[test]
    fn test_extract_round_trip_with_stride() {
        // Re-inserting the source stride must reproduce the padded
        // plane's payload bytes exactly (lossless copy).
        let y_tight: Vec<u8> = (0u8..24).map(|i| i * 3).collect();
        let y_padded = pad_plane(&y_tight, 4, 6, 11);
        let u_tight = vec![90, 91, 92, 93, 94, 95];
        let u_padded = pad_plane(&u_tight, 2, 3, 7);
        let v_tight = vec![201, 202, 203, 204, 205, 206];
        let v_padded = pad_plane(&v_tight, 2, 3, 7);

        let view = PictureView::new(
            6,
            4,
            Plane {
                data: &y_padded,
                stride: 11,
            },
            Plane {
                data: &u_padded,
                stride: 7,
            },
            Plane {
                data: &v_padded,
                stride: 7,
            },
        )
        .unwrap();
        let frame = extract_planar(&view).unwrap();

        let repadded = pad_plane(frame.y_plane(), 4, 6, 11);
        assert_eq!(repadded, y_padded);
        let repadded = pad_plane(frame.u_plane(), 2, 3, 7);
        assert_eq!(repadded, u_padded);
        let repadded = pad_plane(frame.v_plane(), 2, 3, 7);
        assert_eq!(repadded, v_padded);
    }
}
