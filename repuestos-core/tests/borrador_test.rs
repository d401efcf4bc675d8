//! Submission-gate tests for sale and purchase drafts.

use repuestos_core::borrador::{CompraBorrador, VentaBorrador};
use repuestos_core::error::EnvioError;
use repuestos_core::models::Repuesto;
use rust_decimal::Decimal;

fn d(valor: &str) -> Decimal {
    valor.parse().expect("literal decimal")
}

fn repuesto(id: i64, stock: u32) -> Repuesto {
    Repuesto {
        id_repuesto: id,
        nombre: format!("Repuesto {id}"),
        stock_actual: stock,
        costo: d("6.50"),
        precio_sugerido: d("12.00"),
        estado: true,
        ids_categorias: Vec::new(),
        tags_busqueda: None,
        id_sistema: None,
        compatibilidades: Vec::new(),
    }
}

fn venta_lista() -> VentaBorrador {
    let mut borrador = VentaBorrador::nueva();
    borrador.nombre_cliente = "Carlos Mamani".to_string();
    borrador
        .detalle
        .agregar(repuesto(5, 10), 2, d("10"))
        .unwrap();
    borrador
}

#[test]
fn venta_valida_pasa_el_filtro() {
    assert!(venta_lista().validar_envio().is_ok());
}

#[test]
fn nombre_corto_bloquea_el_envio_aunque_el_detalle_sea_valido() {
    let mut borrador = venta_lista();
    borrador.nombre_cliente = "CM".to_string();

    assert!(matches!(
        borrador.validar_envio(),
        Err(EnvioError::Campos(_))
    ));
}

#[test]
fn detalle_vacio_bloquea_el_envio_aunque_el_nombre_sea_valido() {
    let mut borrador = VentaBorrador::nueva();
    borrador.nombre_cliente = "Carlos Mamani".to_string();

    assert!(matches!(borrador.validar_envio(), Err(EnvioError::SinLineas)));
}

#[test]
fn compra_sin_proveedor_ni_lineas_reporta_el_primer_motivo() {
    let borrador = CompraBorrador::nueva();

    // Field validation runs first; the empty detalle is reported once the
    // header is fixed.
    assert!(matches!(
        borrador.validar_envio(),
        Err(EnvioError::Campos(_))
    ));
}

#[test]
fn compra_valida_pasa_el_filtro() {
    let mut borrador = CompraBorrador::nueva();
    borrador.nombre_proveedor = "Importadora Andina".to_string();
    borrador
        .detalle
        .agregar(repuesto(9, 0), 10, d("6.50"))
        .unwrap();

    assert!(borrador.validar_envio().is_ok());
    assert_eq!(borrador.total(), d("65.00"));
}

#[test]
fn reiniciar_vuelve_a_documento_nuevo() {
    let mut borrador = venta_lista();
    borrador.id_venta = Some(42);

    borrador.reiniciar();

    assert!(!borrador.modo_edicion());
    assert!(borrador.nombre_cliente.is_empty());
    assert!(borrador.detalle.is_empty());
}

#[test]
fn edicion_reconstruye_el_borrador_desde_lo_persistido() {
    use repuestos_core::detalle::DetalleVenta;
    use repuestos_core::models::Venta;

    let venta = Venta {
        id_venta: 7,
        nombre_cliente: "Carlos Mamani".to_string(),
        fecha: chrono::NaiveDate::from_ymd_opt(2025, 11, 7)
            .unwrap()
            .and_hms_opt(22, 28, 54)
            .unwrap(),
        total: d("20"),
        descuento_total: Decimal::ZERO,
        lineas: vec![DetalleVenta {
            id_repuesto: 5,
            cantidad: 2,
            precio_sugerido: d("12"),
            precio_unitario: d("10"),
            costo: d("6.50"),
            total: d("20"),
        }],
    };

    let borrador = VentaBorrador::para_edicion(venta, vec![repuesto(5, 10)]).unwrap();

    assert!(borrador.modo_edicion());
    assert_eq!(borrador.total(), d("20"));
    assert!(borrador.validar_envio().is_ok());
}
