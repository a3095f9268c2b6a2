//! # Fixtures
//!
//! Fixed demo data: the ten historical customers and the bakery's real
//! product catalog. The seeder never generates customers or products at
//! random; only the sales are randomized.

use crate::money::Money;

/// A customer to provision, keyed by RUT.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomerFixture {
    pub rut: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
}

/// A catalog product to provision, keyed by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogFixture {
    pub name: &'static str,
    pub description: &'static str,
    pub brand: &'static str,
    pub cost_price: Money,
    pub sale_price: Money,
    pub stock: i64,
}

/// The ten historical customers. Sales are created for them in this order.
pub const CUSTOMERS: &[CustomerFixture] = &[
    CustomerFixture {
        rut: "12345678-9",
        name: "Juan Pérez González",
        email: "juan.perez@email.com",
        phone: "+56912345678",
    },
    CustomerFixture {
        rut: "23456789-0",
        name: "María García Rodríguez",
        email: "maria.garcia@email.com",
        phone: "+56923456789",
    },
    CustomerFixture {
        rut: "34567890-1",
        name: "Carlos López Martínez",
        email: "carlos.lopez@email.com",
        phone: "+56934567890",
    },
    CustomerFixture {
        rut: "45678901-2",
        name: "Ana Fernández Silva",
        email: "ana.fernandez@email.com",
        phone: "+56945678901",
    },
    CustomerFixture {
        rut: "56789012-3",
        name: "Roberto Martínez Torres",
        email: "roberto.martinez@email.com",
        phone: "+56956789012",
    },
    CustomerFixture {
        rut: "67890123-4",
        name: "Carmen Sánchez Morales",
        email: "carmen.sanchez@email.com",
        phone: "+56967890123",
    },
    CustomerFixture {
        rut: "78901234-5",
        name: "Pedro Ramírez Castro",
        email: "pedro.ramirez@email.com",
        phone: "+56978901234",
    },
    CustomerFixture {
        rut: "89012345-6",
        name: "Isabel Flores Vargas",
        email: "isabel.flores@email.com",
        phone: "+56989012345",
    },
    CustomerFixture {
        rut: "90123456-7",
        name: "Diego Morales Rojas",
        email: "diego.morales@email.com",
        phone: "+56990123456",
    },
    CustomerFixture {
        rut: "11223344-5",
        name: "Patricia Vega Muñoz",
        email: "patricia.vega@email.com",
        phone: "+56911223344",
    },
];

const BRAND: &str = "La Fornería";

/// The bakery's real products, as shown on the storefront.
pub const CATALOG: &[CatalogFixture] = &[
    CatalogFixture {
        name: "Bowl Ensalada",
        description: "Mix de hojas frescas con aderezo especial.",
        brand: BRAND,
        cost_price: Money::from_pesos(3000),
        sale_price: Money::from_pesos(8000),
        stock: 50,
    },
    CatalogFixture {
        name: "Panini Artesanal",
        description: "Pan italiano tradicional.",
        brand: BRAND,
        cost_price: Money::from_pesos(2000),
        sale_price: Money::from_pesos(6500),
        stock: 60,
    },
    CatalogFixture {
        name: "Ciabata",
        description: "Pan rústico italiano.",
        brand: BRAND,
        cost_price: Money::from_pesos(1500),
        sale_price: Money::from_pesos(5000),
        stock: 80,
    },
    CatalogFixture {
        name: "Pan Integral",
        description: "Rico en fibra, elaborado con granos enteros y semillas.",
        brand: BRAND,
        cost_price: Money::from_pesos(1800),
        sale_price: Money::from_pesos(5500),
        stock: 70,
    },
    CatalogFixture {
        name: "Pan de Masa Madre",
        description: "Fermentación natural de 24 horas para un sabor único.",
        brand: BRAND,
        cost_price: Money::from_pesos(2200),
        sale_price: Money::from_pesos(6800),
        stock: 45,
    },
    CatalogFixture {
        name: "Rollos de Canela",
        description: "Pan dulce glaseado con azúcar de canela.",
        brand: BRAND,
        cost_price: Money::from_pesos(1200),
        sale_price: Money::from_pesos(4500),
        stock: 90,
    },
    CatalogFixture {
        name: "Lasagnas Caseras",
        description: "Lasagna casera congelada, lista para hornear.",
        brand: BRAND,
        cost_price: Money::from_pesos(3500),
        sale_price: Money::from_pesos(10000),
        stock: 30,
    },
    CatalogFixture {
        name: "Pastas Italianas",
        description: "Variedad de pastas italianas congeladas.",
        brand: BRAND,
        cost_price: Money::from_pesos(2500),
        sale_price: Money::from_pesos(7500),
        stock: 40,
    },
    CatalogFixture {
        name: "Pescados y Mariscos",
        description: "Pescados y mariscos congelados premium.",
        brand: BRAND,
        cost_price: Money::from_pesos(5000),
        sale_price: Money::from_pesos(15000),
        stock: 25,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ten_customers_with_unique_ruts() {
        assert_eq!(CUSTOMERS.len(), 10);
        let ruts: HashSet<&str> = CUSTOMERS.iter().map(|c| c.rut).collect();
        assert_eq!(ruts.len(), CUSTOMERS.len());
    }

    #[test]
    fn test_catalog_prices_are_above_cost() {
        let names: HashSet<&str> = CATALOG.iter().map(|p| p.name).collect();
        assert_eq!(names.len(), CATALOG.len());

        for product in CATALOG {
            assert!(product.sale_price > product.cost_price, "{}", product.name);
            assert!(product.stock > 0);
        }
    }
}
