//! Aggregation tests for the shared line-item engine.

use repuestos_core::detalle::{Detalle, DetalleCompra, DetalleVenta, LineaDetalle};
use repuestos_core::error::DetalleError;
use repuestos_core::models::Repuesto;
use rust_decimal::Decimal;

fn d(valor: &str) -> Decimal {
    valor.parse().expect("literal decimal")
}

/// Catalog snapshot used across tests.
fn repuesto(id: i64, stock: u32) -> Repuesto {
    Repuesto {
        id_repuesto: id,
        nombre: format!("Repuesto {id}"),
        stock_actual: stock,
        costo: d("6.50"),
        precio_sugerido: d("12.00"),
        estado: true,
        ids_categorias: vec![1],
        tags_busqueda: None,
        id_sistema: None,
        compatibilidades: Vec::new(),
    }
}

#[test]
fn agregar_inserta_linea_con_total_calculado() {
    let mut detalle: Detalle<DetalleVenta> = Detalle::new();
    detalle.agregar(repuesto(5, 10), 2, d("10")).unwrap();

    assert_eq!(detalle.len(), 1);
    let linea = &detalle.lineas()[0];
    assert_eq!(linea.id_repuesto, 5);
    assert_eq!(linea.cantidad, 2);
    assert_eq!(linea.precio_unitario, d("10"));
    assert_eq!(linea.total, d("20"));
    assert_eq!(detalle.total(), d("20"));
    assert!(detalle.repuesto(5).is_some());
}

#[test]
fn agregar_repetido_suma_cantidad_y_descarta_precio_nuevo() {
    let mut detalle: Detalle<DetalleVenta> = Detalle::new();
    detalle.agregar(repuesto(5, 10), 2, d("10")).unwrap();
    detalle.agregar(repuesto(5, 10), 3, d("99")).unwrap();

    // One line, accumulated quantity, first price kept.
    assert_eq!(detalle.len(), 1);
    let linea = &detalle.lineas()[0];
    assert_eq!(linea.cantidad, 5);
    assert_eq!(linea.precio_unitario, d("10"));
    assert_eq!(linea.total, d("50"));
    assert_eq!(detalle.total(), d("50"));
}

#[test]
fn agregar_venta_respeta_stock_en_linea_nueva() {
    let mut detalle: Detalle<DetalleVenta> = Detalle::new();
    let err = detalle.agregar(repuesto(5, 3), 4, d("10")).unwrap_err();

    assert!(matches!(
        err,
        DetalleError::StockInsuficiente { disponible: 3 }
    ));
    assert!(detalle.is_empty());
    assert!(detalle.repuesto(5).is_none());
}

#[test]
fn agregar_venta_respeta_stock_acumulado() {
    let mut detalle: Detalle<DetalleVenta> = Detalle::new();
    detalle.agregar(repuesto(5, 4), 3, d("10")).unwrap();
    let err = detalle.agregar(repuesto(5, 4), 2, d("10")).unwrap_err();

    assert!(matches!(
        err,
        DetalleError::StockInsuficiente { disponible: 4 }
    ));
    // Rejection leaves the existing line as it was.
    assert_eq!(detalle.lineas()[0].cantidad, 3);
    assert_eq!(detalle.total(), d("30"));
}

#[test]
fn compra_no_tiene_tope_de_stock() {
    let mut detalle: Detalle<DetalleCompra> = Detalle::new();
    detalle.agregar(repuesto(5, 0), 50, d("6.50")).unwrap();

    assert_eq!(detalle.lineas()[0].cantidad, 50);
    assert_eq!(detalle.total(), d("325.00"));
}

#[test]
fn compra_repetida_recalcula_con_costo_existente() {
    let mut detalle: Detalle<DetalleCompra> = Detalle::new();
    detalle.agregar(repuesto(7, 0), 2, d("5")).unwrap();
    detalle.agregar(repuesto(7, 0), 1, d("8")).unwrap();

    assert_eq!(detalle.len(), 1);
    assert_eq!(detalle.lineas()[0].costo, d("5"));
    assert_eq!(detalle.lineas()[0].total, d("15"));
}

#[test]
fn agregar_rechaza_cantidad_cero_y_precio_no_positivo() {
    let mut detalle: Detalle<DetalleVenta> = Detalle::new();

    assert!(matches!(
        detalle.agregar(repuesto(1, 10), 0, d("10")),
        Err(DetalleError::CantidadInvalida)
    ));
    assert!(matches!(
        detalle.agregar(repuesto(1, 10), 1, d("0")),
        Err(DetalleError::PrecioInvalido)
    ));
    assert!(matches!(
        detalle.agregar(repuesto(1, 10), 1, d("-3")),
        Err(DetalleError::PrecioInvalido)
    ));
    assert!(detalle.is_empty());
}

#[test]
fn actualizar_recalcula_total_de_linea_y_documento() {
    let mut detalle: Detalle<DetalleVenta> = Detalle::new();
    detalle.agregar(repuesto(1, 10), 2, d("10")).unwrap();
    detalle.agregar(repuesto(2, 10), 1, d("30")).unwrap();

    detalle.actualizar(0, 4, d("12.50")).unwrap();

    assert_eq!(detalle.lineas()[0].total, d("50.00"));
    assert_eq!(detalle.total(), d("80.00"));
}

#[test]
fn actualizar_rechaza_valores_invalidos_sin_tocar_la_linea() {
    let mut detalle: Detalle<DetalleVenta> = Detalle::new();
    detalle.agregar(repuesto(1, 5), 2, d("10")).unwrap();

    assert!(matches!(
        detalle.actualizar(0, 0, d("10")),
        Err(DetalleError::CantidadInvalida)
    ));
    assert!(matches!(
        detalle.actualizar(0, 2, d("0")),
        Err(DetalleError::PrecioInvalido)
    ));
    assert!(matches!(
        detalle.actualizar(0, 6, d("10")),
        Err(DetalleError::StockInsuficiente { disponible: 5 })
    ));
    assert!(matches!(
        detalle.actualizar(9, 1, d("10")),
        Err(DetalleError::IndiceInvalido(9))
    ));

    let linea = &detalle.lineas()[0];
    assert_eq!((linea.cantidad, linea.precio_unitario, linea.total), (2, d("10"), d("20")));
}

#[test]
fn eliminar_quita_linea_y_desaloja_cache() {
    let mut detalle: Detalle<DetalleVenta> = Detalle::new();
    detalle.agregar(repuesto(1, 10), 3, d("10")).unwrap();
    detalle.agregar(repuesto(2, 10), 1, d("70")).unwrap();

    let quitada = detalle.eliminar(0).unwrap();

    assert_eq!(quitada.id_repuesto, 1);
    assert!(detalle.repuesto(1).is_none());
    assert!(detalle.repuesto(2).is_some());
    assert_eq!(detalle.total(), d("70"));
}

#[test]
fn total_es_suma_de_lineas_tras_cualquier_secuencia() {
    let mut detalle: Detalle<DetalleVenta> = Detalle::new();
    detalle.agregar(repuesto(1, 20), 2, d("10")).unwrap();
    detalle.agregar(repuesto(2, 20), 1, d("15")).unwrap();
    detalle.agregar(repuesto(1, 20), 3, d("99")).unwrap();
    detalle.actualizar(1, 2, d("14")).unwrap();
    detalle.eliminar(0).unwrap();
    detalle.agregar(repuesto(3, 20), 1, d("5")).unwrap();

    let esperado: Decimal = detalle.lineas().iter().map(LineaDetalle::total).sum();
    assert_eq!(detalle.total(), esperado);
    assert_eq!(detalle.total(), d("33"));
}

#[test]
fn vaciar_descarta_lineas_y_cache() {
    let mut detalle: Detalle<DetalleVenta> = Detalle::new();
    detalle.agregar(repuesto(1, 10), 2, d("10")).unwrap();
    detalle.vaciar();

    assert!(detalle.is_empty());
    assert!(detalle.repuesto(1).is_none());
    assert_eq!(detalle.total(), Decimal::ZERO);
}

#[test]
fn cargar_reconstruye_documento_persistido() {
    let lineas = vec![
        DetalleVenta {
            id_repuesto: 1,
            cantidad: 2,
            precio_sugerido: d("12"),
            precio_unitario: d("10"),
            costo: d("6.50"),
            total: d("20"),
        },
        DetalleVenta {
            id_repuesto: 2,
            cantidad: 1,
            precio_sugerido: d("12"),
            precio_unitario: d("70"),
            costo: d("6.50"),
            total: d("70"),
        },
    ];
    let detalle =
        Detalle::cargar(lineas, vec![repuesto(1, 10), repuesto(2, 10), repuesto(3, 10)]).unwrap();

    assert_eq!(detalle.len(), 2);
    assert_eq!(detalle.total(), d("90"));
    // Unreferenced snapshots are not cached.
    assert!(detalle.repuesto(3).is_none());
}

#[test]
fn cargar_rechaza_linea_sin_repuesto_y_repuesto_duplicado() {
    let linea = |id| DetalleVenta {
        id_repuesto: id,
        cantidad: 1,
        precio_sugerido: d("12"),
        precio_unitario: d("10"),
        costo: d("6.50"),
        total: d("10"),
    };

    assert!(matches!(
        Detalle::cargar(vec![linea(1)], Vec::new()),
        Err(DetalleError::RepuestoNoCargado(1))
    ));
    assert!(matches!(
        Detalle::cargar(vec![linea(1), linea(1)], vec![repuesto(1, 10)]),
        Err(DetalleError::RepuestoDuplicado(1))
    ));
}
