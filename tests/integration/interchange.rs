use numerics::{FloatBuffer, Matrix4x4, MatrixSink, NumericsError, Quaternion, Vector3};

// Uniform block layout a renderer would upload, mirroring a WGSL `mat4x4<f32>`.
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct CameraUniforms {
    view_proj: Matrix4x4,
    model: [[f32; 4]; 4],
}

fn model_matrix() -> Matrix4x4 {
    Matrix4x4::for_translation_rotation_scale(
        Vector3::new(1.0, 2.0, 3.0),
        Quaternion::from_axis_angle(Vector3::new(0.0, 1.0, 0.0), 0.25),
        Vector3::new(1.0, 2.0, 1.0),
    )
}

#[test]
fn test_identity_exports_in_column_major_order() {
    let expected = [
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ];
    assert_eq!(Matrix4x4::<f32>::identity().to_cols_array(), expected);
    let flat: [f32; 16] = Matrix4x4::<f32>::identity().into();
    assert_eq!(flat, expected);
}

#[test]
fn test_export_groups_columns() {
    let m = model_matrix();
    let flat = m.to_cols_array();
    for (i, chunk) in flat.chunks(4).enumerate() {
        assert_eq!(chunk, &m.column(i).unwrap().to_array()[..]);
    }
    assert_eq!(&flat[12..15], &[1.0, 2.0, 3.0]);
}

#[test]
fn test_write_into_reuses_a_buffer_across_frames() {
    let mut buffer = FloatBuffer::<f32>::for_matrix();

    for frame in 0..3 {
        let m = Matrix4x4::for_translation(Vector3::new(frame as f32, 0.0, 0.0));
        m.write_into(&mut buffer).unwrap();

        assert_eq!(buffer.position(), 0);
        assert_eq!(buffer.remaining(), 16);
        let read: Vec<f32> = std::iter::from_fn(|| buffer.get()).collect();
        assert_eq!(read, m.to_cols_array().to_vec());
        assert_eq!(buffer.get(), None);
    }
}

#[test]
fn test_write_into_discards_previous_contents() {
    let mut buffer = FloatBuffer::<f32>::with_capacity(64);
    for _ in 0..40 {
        buffer.put(-1.0).unwrap();
    }
    buffer.flip();

    Matrix4x4::<f32>::identity().write_into(&mut buffer).unwrap();
    assert_eq!(buffer.as_slice().len(), 16);
    assert_eq!(buffer.as_slice(), &Matrix4x4::<f32>::identity().to_cols_array()[..]);
}

#[test]
fn test_sinks_report_short_storage() {
    let m = model_matrix();

    let mut tiny = FloatBuffer::<f32>::with_capacity(15);
    assert_eq!(
        m.write_into(&mut tiny),
        Err(NumericsError::BufferOverflow { required: 16, available: 15 })
    );

    let mut short = [0.0f32; 4];
    assert!(short[..].write_matrix(&m.to_cols_array()).is_err());

    let mut grows: Vec<f32> = Vec::new();
    m.write_into(&mut grows).unwrap();
    assert_eq!(grows.len(), 16);
}

#[test]
fn test_pod_cast_into_uniform_block() {
    let view_proj = Matrix4x4::for_perspective(1.0, 1.5, 0.1, 100.0);
    let model = model_matrix();
    let uniforms = CameraUniforms {
        view_proj,
        model: model.to_cols_array_2d(),
    };

    let bytes = bytemuck::bytes_of(&uniforms);
    assert_eq!(bytes.len(), 2 * 16 * std::mem::size_of::<f32>());

    let floats: &[f32] = bytemuck::cast_slice(bytes);
    assert_eq!(&floats[..16], view_proj.as_slice());
    assert_eq!(&floats[16..], model.as_slice());
}

#[test]
fn test_serde_roundtrip_preserves_bits() {
    let config = bincode::config::standard();
    let m = Matrix4x4::from_cols_array([
        -0.0, f32::INFINITY, 1.0, 2.0,
        3.0, 4.0, f32::MIN_POSITIVE, 6.0,
        7.0, 8.0, 9.0, f32::MAX,
        11.0, 12.0, 13.0, 14.0,
    ]);

    let encoded = bincode::serde::encode_to_vec(m, config).unwrap();
    let (decoded, read): (Matrix4x4, usize) =
        bincode::serde::decode_from_slice(&encoded, config).unwrap();

    assert_eq!(read, encoded.len());
    assert_eq!(
        decoded.to_cols_array().map(f32::to_bits),
        m.to_cols_array().map(f32::to_bits)
    );
}
