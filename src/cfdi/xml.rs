//! Namespace-agnostic XML lookups
//!
//! Payroll documents arrive with different namespace prefixes and
//! declarations depending on the issuing software. Nodes are matched on
//! their local tag name, case-insensitively, so `cfdi:Emisor`,
//! `{http://www.sat.gob.mx/cfd/4}Emisor` and `emisor` are all the same node.

use roxmltree::Node;

/// Whether an element's local name matches `name` (case-insensitive)
pub fn has_local_name(node: &Node<'_, '_>, name: &str) -> bool {
    node.is_element() && node.tag_name().name().eq_ignore_ascii_case(name)
}

/// First element named `name` in document order, starting at `node` itself
pub fn find_first<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.descendants().find(|n| has_local_name(n, name))
}

/// Direct child elements named `name`
pub fn children_named<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children().filter(move |n| has_local_name(n, name))
}

/// Attribute value, treating blank values as missing
pub fn attr<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attribute(name).filter(|v| !v.trim().is_empty())
}

/// Attribute of an optional node, or an empty string
pub fn attr_or_empty(node: Option<Node<'_, '_>>, name: &str) -> String {
    node.and_then(|n| attr(n, name))
        .map(|v| v.trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    const DOC: &str = r#"<cfdi:Comprobante xmlns:cfdi="http://www.sat.gob.mx/cfd/4" Version="4.0">
        <cfdi:Emisor Nombre="ACME SA" />
        <cfdi:Complemento>
            <x:Nomina xmlns:x="urn:other" FechaPago="2025-01-15">
                <x:Deducciones>
                    <x:Deduccion TipoDeduccion="002" Importe="10" />
                    <x:Deduccion TipoDeduccion="001" Importe="5" />
                    <x:Otro />
                </x:Deducciones>
            </x:Nomina>
        </cfdi:Complemento>
    </cfdi:Comprobante>"#;

    #[test]
    fn test_find_first_ignores_prefix_and_case() {
        let doc = Document::parse(DOC).unwrap();
        let root = doc.root_element();
        assert!(find_first(root, "emisor").is_some());
        assert!(find_first(root, "NOMINA").is_some());
        assert!(find_first(root, "Receptor").is_none());
        // The starting node itself is a candidate
        assert!(find_first(root, "Comprobante").is_some());
    }

    #[test]
    fn test_children_named() {
        let doc = Document::parse(DOC).unwrap();
        let deducciones = find_first(doc.root_element(), "Deducciones").unwrap();
        assert_eq!(children_named(deducciones, "Deduccion").count(), 2);
    }

    #[test]
    fn test_attr_helpers() {
        let doc = Document::parse(DOC).unwrap();
        let root = doc.root_element();
        let emisor = find_first(root, "Emisor");
        assert_eq!(attr_or_empty(emisor, "Nombre"), "ACME SA");
        assert_eq!(attr_or_empty(emisor, "Rfc"), "");
        assert_eq!(attr_or_empty(None, "Nombre"), "");
        assert_eq!(attr(root, "Version"), Some("4.0"));
    }
}
