#[cfg(test)]
mod rendering_tests {
    use crate::config::{Config, VisibilityPolicy};
    use crate::diagnostics::{SourceLocation, Warning};
    use crate::directive::Environment;
    use crate::document::builders::{paragraph, text};
    use crate::document::{AdmonitionKind, Description, Field, Node, ObjectType, Section};
    use crate::domain::CDomain;
    use crate::error::{Error, Result};
    use crate::render::{ElementRenderer, Registry, RenderContext, Rendered};
    use crate::xml;

    const ADD: &str = r#"<memberdef kind="function" id="sum_8h_1a2a" prot="public" static="no">
  <type>int</type>
  <definition>int add</definition>
  <argsstring>(int a, int b)</argsstring>
  <name>add</name>
  <param><type>int</type><declname>a</declname></param>
  <param><type>int</type><declname>b</declname></param>
  <briefdescription>
<para>Add two numbers. </para>
  </briefdescription>
  <detaileddescription>
<para>Adds them together.
<parameterlist kind="param"><parameteritem>
<parameternamelist>
<parametername>a</parametername>
</parameternamelist>
<parameterdescription>
<para>First operand. </para>
</parameterdescription>
</parameteritem>
<parameteritem>
<parameternamelist>
<parametername>b</parametername>
</parameternamelist>
<parameterdescription>
<para>Second operand. </para>
</parameterdescription>
</parameteritem>
</parameterlist>
<simplesect kind="return"><para>The sum. </para>
</simplesect>
</para>
  </detaileddescription>
  <location file="sum.h" line="10"/>
</memberdef>"#;

    const POINT: &str = r#"<compounddef id="structPoint" kind="struct" language="C++" prot="public">
  <compoundname>Point</compoundname>
  <sectiondef kind="public-attrib">
  <memberdef kind="variable" id="structPoint_1ax" prot="public" static="no" mutable="no">
    <type>int</type>
    <definition>int Point::x</definition>
    <argsstring></argsstring>
    <name>x</name>
    <briefdescription><para>Horizontal. </para></briefdescription>
    <detaileddescription></detaileddescription>
    <location file="point.h" line="4"/>
  </memberdef>
  <memberdef kind="variable" id="structPoint_1ay" prot="public" static="no" mutable="no">
    <type>int</type>
    <definition>int Point::y</definition>
    <argsstring></argsstring>
    <name>y</name>
    <briefdescription><para>Vertical. </para></briefdescription>
    <detaileddescription></detaileddescription>
    <location file="point.h" line="6"/>
  </memberdef>
  </sectiondef>
  <briefdescription><para>A point. </para></briefdescription>
  <detaileddescription></detaileddescription>
  <location file="point.h" line="2"/>
  <listofallmembers>
    <member refid="structPoint_1ax" prot="public" virt="non-virtual"><scope>Point</scope><name>x</name></member>
    <member refid="structPoint_1ay" prot="public" virt="non-virtual"><scope>Point</scope><name>y</name></member>
  </listofallmembers>
</compounddef>"#;

    fn render_with(source: &str, config: Config) -> Result<(Vec<Node>, Vec<Warning>)> {
        let env = Environment::new(config);
        let doc = xml::parse(source).unwrap();
        let mut cx = env.context(SourceLocation::new("test.rst", 7));
        let nodes = cx.render(doc.root_element())?;
        Ok((nodes, cx.into_diagnostics().into_warnings()))
    }

    fn render(source: &str) -> Result<Vec<Node>> {
        render_with(source, Config::default()).map(|(nodes, _)| nodes)
    }

    fn description(node: &Node) -> &Description {
        match node {
            Node::Description(description) => description,
            other => panic!("expected a description, got {:?}", other),
        }
    }

    fn section(node: &Node) -> &Section {
        match node {
            Node::Section(section) => section,
            other => panic!("expected a section, got {:?}", other),
        }
    }

    fn field_lists(nodes: &[Node]) -> Vec<&[Field]> {
        nodes
            .iter()
            .filter_map(|node| match node {
                Node::FieldList(fields) => Some(fields.as_slice()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_function_signature_and_parameter_fields() {
        let nodes = render(ADD).unwrap();
        assert_eq!(nodes.len(), 1);
        let function = description(&nodes[0]);
        assert_eq!(function.domain, "c");
        assert_eq!(function.objtype, ObjectType::Function);
        assert_eq!(function.signature, "int add(int a, int b)");

        let lists = field_lists(&function.content);
        assert_eq!(lists.len(), 1);
        let fields = lists[0];
        let params: Vec<&str> = fields
            .iter()
            .filter(|f| f.name == "Parameters")
            .filter_map(|f| f.arg.as_deref())
            .collect();
        assert_eq!(params, vec!["a", "b"]);
        assert_eq!(fields[0].body, text("First operand."));
        assert_eq!(fields[1].body, text("Second operand."));
        assert_eq!(fields[2].name, "Returns");
        assert_eq!(fields[2].arg, None);
        assert_eq!(fields[2].body, text("The sum."));
    }

    #[test]
    fn test_function_fields_are_not_rendered_twice() {
        let nodes = render(ADD).unwrap();
        let function = description(&nodes[0]);
        assert_eq!(
            function.content,
            vec![
                paragraph(vec![text("Add two numbers.")]),
                paragraph(vec![text("Adds them together.")]),
                function.content[2].clone(),
            ]
        );
        let outside: String = function.content[..2].iter().map(Node::astext).collect();
        assert!(!outside.contains("operand"));
        assert!(!outside.contains("The sum"));
    }

    #[test]
    fn test_rendering_the_same_parse_twice_is_identical() {
        let env = Environment::new(Config::default());
        let doc = xml::parse(ADD).unwrap();
        let mut first = env.context(SourceLocation::new("a.rst", 1));
        let mut second = env.context(SourceLocation::new("b.rst", 1));
        let once = first.render(doc.root_element()).unwrap();
        let twice = second.render(doc.root_element()).unwrap();
        assert_eq!(once, twice);
        assert_eq!(once, first.render(doc.root_element()).unwrap());
    }

    #[test]
    fn test_exclusion_ends_with_the_function() {
        let env = Environment::new(Config::default());
        let doc = xml::parse(ADD).unwrap();
        let parameters = doc
            .descendants()
            .find(|n| xml::is_tag(*n, "parameterlist"))
            .unwrap();
        let mut cx = env.context(SourceLocation::new("test.rst", 1));
        cx.render(doc.root_element()).unwrap();
        let standalone = cx.render(parameters).unwrap();
        assert_eq!(field_lists(&standalone).len(), 1);
        assert_eq!(field_lists(&standalone)[0].len(), 2);
    }

    #[test]
    fn test_protected_function_is_rejected() {
        let source = ADD.replace("prot=\"public\"", "prot=\"protected\"");
        match render(&source) {
            Err(error @ Error::NonPublic { .. }) => {
                let message = error.to_string();
                assert!(message.contains("cannot handle memberdef kind=function"));
                assert!(message.contains("protected"));
            }
            other => panic!("expected a protection error, got {:?}", other),
        }
    }

    #[test]
    fn test_member_without_protection_is_rejected() {
        let source = r#"<memberdef kind="define"><name>FOO</name></memberdef>"#;
        assert!(matches!(render(source), Err(Error::NonPublic { prot, .. }) if prot == "None"));
    }

    #[test]
    fn test_protected_function_is_skipped_when_configured() {
        let source = ADD.replace("prot=\"public\"", "prot=\"private\"");
        let config = Config::default().with_non_public(VisibilityPolicy::Skip);
        let (nodes, warnings) = render_with(&source, config).unwrap();
        assert!(nodes.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_struct_section_with_members_in_order() {
        let nodes = render(POINT).unwrap();
        assert_eq!(nodes.len(), 1);
        let point = section(&nodes[0]);
        assert_eq!(point.title, "Struct Point");
        assert_eq!(point.id, "struct-point");
        assert_eq!(point.children.len(), 2);

        let header = description(&point.children[0]);
        assert_eq!(header.objtype, ObjectType::Type);
        assert_eq!(header.signature, "struct Point");
        assert_eq!(header.content, vec![paragraph(vec![text("A point.")])]);

        let members = section(&point.children[1]);
        assert_eq!(members.title, "Members");
        assert_eq!(members.id, "public-attrib");
        let signatures: Vec<&str> = members
            .children
            .iter()
            .map(|node| description(node).signature.as_str())
            .collect();
        assert_eq!(signatures, vec!["int x", "int y"]);
        assert_eq!(description(&members.children[0]).objtype, ObjectType::Member);
    }

    #[test]
    fn test_precondition_admonition() {
        let nodes = render(r#"<simplesect kind="pre"><para>must be non-null</para></simplesect>"#).unwrap();
        match nodes.as_slice() {
            [Node::Admonition(admonition)] => {
                assert_eq!(admonition.kind, AdmonitionKind::Custom);
                assert_eq!(admonition.title.as_deref(), Some("Precondition"));
                assert_eq!(admonition.children, vec![paragraph(vec![text("must be non-null")])]);
            }
            other => panic!("unexpected output {:?}", other),
        }
    }

    #[test]
    fn test_postcondition_note_and_warning() {
        let post = render(r#"<simplesect kind="post"><para>done</para></simplesect>"#).unwrap();
        assert!(matches!(&post[0], Node::Admonition(a) if a.title.as_deref() == Some("Postcondition")));

        let note = render(r#"<simplesect kind="note"><para>n</para></simplesect>"#).unwrap();
        assert!(matches!(&note[0], Node::Admonition(a) if a.kind == AdmonitionKind::Note && a.title.is_none()));

        let warning = render(r#"<simplesect kind="warning"><para>w</para></simplesect>"#).unwrap();
        assert!(matches!(&warning[0], Node::Admonition(a) if a.kind == AdmonitionKind::Warning));
    }

    #[test]
    fn test_titled_par_section() {
        let nodes = render(
            r#"<simplesect kind="par"><title>Thread safety</title><para>None.</para></simplesect>"#,
        )
        .unwrap();
        match nodes.as_slice() {
            [Node::Admonition(admonition)] => {
                assert_eq!(admonition.title.as_deref(), Some("Thread safety"));
                assert_eq!(admonition.children, vec![paragraph(vec![text("None.")])]);
            }
            other => panic!("unexpected output {:?}", other),
        }
    }

    #[test]
    fn test_unknown_tag_renders_a_diagnostic() {
        let (nodes, warnings) = render_with(
            "<programlisting><codeline/></programlisting>",
            Config::default(),
        )
        .unwrap();
        assert_eq!(nodes.len(), 1);
        match &nodes[0] {
            Node::Admonition(admonition) => {
                assert_eq!(admonition.kind, AdmonitionKind::Warning);
                assert_eq!(
                    admonition.children[0].astext(),
                    "doxtree: No renderer found for doxygen tag 'programlisting'"
                );
                assert!(admonition.children[1].astext().contains("<codeline/>"));
            }
            other => panic!("unexpected node {:?}", other),
        }
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].location, SourceLocation::new("test.rst", 7));
        assert!(warnings[0].message.contains("'programlisting'"));
    }

    #[test]
    fn test_unknown_tag_does_not_stop_siblings() {
        let nodes = render("<para>Before <anchor id=\"x\"/>after.</para>").unwrap();
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0], paragraph(vec![text("Before")]));
        assert!(matches!(&nodes[1], Node::Admonition(_)));
        assert_eq!(nodes[2], paragraph(vec![text("after.")]));
    }

    #[test]
    fn test_unknown_kinds_are_fatal() {
        for source in [
            r#"<memberdef kind="enum" prot="public"/>"#,
            r#"<compounddef kind="union"/>"#,
            r#"<sectiondef kind="var"/>"#,
            r#"<simplesect kind="author"/>"#,
            r#"<parameterlist kind="retval"/>"#,
            r#"<compound kind="struct" refid="structone"/>"#,
        ] {
            match render(source) {
                Err(Error::UnknownKind { .. }) => {}
                other => panic!("expected unknown kind for {}, got {:?}", source, other),
            }
        }
        let error = render("<memberdef prot=\"public\"/>").unwrap_err();
        assert_eq!(error.to_string(), "cannot handle memberdef kind=None");
    }

    #[test]
    fn test_paragraph_strips_plain_text() {
        let nodes = render("<para>\n   just text  \n</para>").unwrap();
        assert_eq!(nodes, vec![paragraph(vec![text("just text")])]);
        assert!(render("<para>   </para>").unwrap().is_empty());
    }

    #[test]
    fn test_cross_references_use_domain_roles() {
        let nodes = render(
            r#"<para>See <ref refid="sum_8h_1a" kindref="member">sum()</ref> and <ref refid="structone" kindref="compound">one</ref>.</para>"#,
        )
        .unwrap();
        let inlines = match nodes.as_slice() {
            [Node::Paragraph(inlines)] => inlines,
            other => panic!("unexpected output {:?}", other),
        };
        assert_eq!(inlines.len(), 5);
        assert_eq!(inlines[0], text("See "));
        match (&inlines[1], &inlines[3]) {
            (Node::Reference(func), Node::Reference(data)) => {
                assert_eq!((func.role.as_str(), func.target.as_str()), ("func", "sum"));
                assert_eq!((data.role.as_str(), data.target.as_str()), ("data", "one"));
            }
            other => panic!("unexpected references {:?}", other),
        }
        assert_eq!(inlines[2], text("and"));
        assert_eq!(inlines[4], text("."));
    }

    #[test]
    fn test_unknown_reference_kind_is_fatal() {
        let error = render(r#"<ref refid="x" kindref="group">g</ref>"#).unwrap_err();
        assert_eq!(error.to_string(), "cannot handle ref kind=group");
    }

    #[test]
    fn test_inline_markup() {
        let nodes = render(
            r#"<para>Use <computeroutput>NULL</computeroutput>, <emphasis>never</emphasis> <bold>0</bold>; see <ulink url="https://ceph.com">docs</ulink>.</para>"#,
        )
        .unwrap();
        match nodes.as_slice() {
            [Node::Paragraph(inlines)] => {
                assert_eq!(inlines[1], Node::Literal("NULL".to_string()));
                assert_eq!(inlines[3], Node::Emphasis(vec![text("never")]));
                assert_eq!(inlines[4], Node::Strong(vec![text("0")]));
                assert!(matches!(&inlines[6], Node::Link(link) if link.url == "https://ceph.com"));
            }
            other => panic!("unexpected output {:?}", other),
        }
    }

    #[test]
    fn test_itemized_list_splits_paragraph() {
        let nodes = render(
            "<para>Options:\n<itemizedlist>\n<listitem><para>one</para></listitem>\n<listitem><para>two</para></listitem>\n</itemizedlist>\n</para>",
        )
        .unwrap();
        assert_eq!(
            nodes,
            vec![
                paragraph(vec![text("Options:")]),
                Node::BulletList(vec![
                    Node::ListItem(vec![paragraph(vec![text("one")])]),
                    Node::ListItem(vec![paragraph(vec![text("two")])]),
                ]),
            ]
        );
    }

    #[test]
    fn test_stray_text_in_lists_is_fatal() {
        let error = render("<itemizedlist>oops<listitem/></itemizedlist>").unwrap_err();
        assert!(matches!(error, Error::Schema { ref tag, .. } if tag == "itemizedlist"));

        let error = render("<listitem>oops<para>x</para></listitem>").unwrap_err();
        assert!(matches!(error, Error::Schema { ref tag, .. } if tag == "listitem"));
    }

    #[test]
    fn test_several_parameter_names_are_unsupported() {
        let source = ADD.replace(
            "<parametername>a</parametername>",
            "<parametername>a</parametername><parametername>c</parametername>",
        );
        let error = render(&source).unwrap_err();
        assert!(matches!(error, Error::Schema { ref tag, .. } if tag == "parameteritem"));
    }

    #[test]
    fn test_multi_paragraph_return_keeps_container() {
        let source = r#"<memberdef kind="function" prot="public">
            <type>int</type><name>f</name><argsstring>(void)</argsstring>
            <detaileddescription><para><simplesect kind="return"><para>zero</para><para>or one</para></simplesect></para></detaileddescription>
        </memberdef>"#;
        let nodes = render(source).unwrap();
        let function = description(&nodes[0]);
        assert_eq!(function.signature, "int f(void)");
        assert_eq!(function.content.len(), 1);
        let fields = field_lists(&function.content)[0];
        assert_eq!(
            fields[0].body,
            Node::Container(vec![paragraph(vec![text("zero")]), paragraph(vec![text("or one")])])
        );
    }

    #[test]
    fn test_function_without_fields_has_no_field_list() {
        let source = r#"<memberdef kind="function" prot="public">
            <type>void</type><name>reset</name><argsstring>(void)</argsstring>
            <briefdescription><para>Reset.</para></briefdescription>
            <detaileddescription><para><simplesect kind="note"><para>Slow.</para></simplesect></para></detaileddescription>
        </memberdef>"#;
        let nodes = render(source).unwrap();
        let function = description(&nodes[0]);
        assert!(field_lists(&function.content).is_empty());
        assert_eq!(function.content.len(), 2);
        assert!(matches!(&function.content[1], Node::Admonition(a) if a.kind == AdmonitionKind::Note));
    }

    #[test]
    fn test_define_and_typedef_render_by_name() {
        let define = render(
            r#"<memberdef kind="define" prot="public"><name>LIBRADOS_VER_MAJOR</name><initializer>0</initializer>
            <briefdescription></briefdescription>
            <detaileddescription><para>Major version.</para></detaileddescription></memberdef>"#,
        )
        .unwrap();
        let define = description(&define[0]);
        assert_eq!((define.objtype, define.signature.as_str()), (ObjectType::Macro, "LIBRADOS_VER_MAJOR"));
        assert_eq!(define.content, vec![paragraph(vec![text("Major version.")])]);

        let typedef = render(
            r#"<memberdef kind="typedef" prot="public"><type>void *</type><name>rados_t</name>
            <briefdescription><para>A cluster handle.</para></briefdescription></memberdef>"#,
        )
        .unwrap();
        let typedef = description(&typedef[0]);
        assert_eq!((typedef.objtype, typedef.signature.as_str()), (ObjectType::Type, "rados_t"));
    }

    #[test]
    fn test_macro_parameters_become_a_field_list() {
        let nodes = render(
            r#"<memberdef kind="define" prot="public"><name>LIBRADOS_VERSION</name>
            <detaileddescription><para>Pack a version.<parameterlist kind="param"><parameteritem>
            <parameternamelist><parametername>maj</parametername></parameternamelist>
            <parameterdescription><para>major</para></parameterdescription>
            </parameteritem></parameterlist></para></detaileddescription></memberdef>"#,
        )
        .unwrap();
        let define = description(&nodes[0]);
        assert_eq!(define.content[0], paragraph(vec![text("Pack a version.")]));
        let fields = field_lists(&define.content)[0];
        assert_eq!(fields[0].arg.as_deref(), Some("maj"));
        assert_eq!(fields[0].body, text("major"));
    }

    #[test]
    fn test_file_compound_is_transparent() {
        let nodes = render(
            r#"<compounddef id="sum_8h" kind="file" language="C++">
            <compoundname>sum.h</compoundname>
            <includes local="no">stdint.h</includes>
            <sectiondef kind="define"><memberdef kind="define" prot="public"><name>SUM_MAX</name></memberdef></sectiondef>
            <briefdescription></briefdescription>
            <detaileddescription></detaileddescription>
            <location file="sum.h"/>
            </compounddef>"#,
        )
        .unwrap();
        assert_eq!(nodes.len(), 1);
        let defines = section(&nodes[0]);
        assert_eq!(defines.title, "Defines");
        assert_eq!(description(&defines.children[0]).signature, "SUM_MAX");
    }

    struct Verbatim;

    impl ElementRenderer for Verbatim {
        fn render(&self, node: xml::XmlNode<'_, '_>, _cx: &mut RenderContext<'_>) -> Result<Vec<Node>> {
            Ok(vec![Node::LiteralBlock(xml::text_content(node))])
        }
    }

    #[test]
    fn test_hosts_can_register_more_tags() {
        let registry = Registry::new();
        assert!(registry.handles("memberdef"));
        assert!(!registry.handles("programlisting"));

        let registry = registry.register("programlisting", Verbatim);
        assert!(registry.handles("programlisting"));
        let env = Environment::new(Config::default()).with_registry(registry);
        let doc = xml::parse("<programlisting><codeline>int x;</codeline></programlisting>").unwrap();
        let mut cx = env.context(SourceLocation::new("test.rst", 1));
        let nodes = cx.render(doc.root_element()).unwrap();
        assert_eq!(nodes, vec![Node::LiteralBlock("int x;".to_string())]);
        assert!(cx.diagnostics().is_empty());
    }

    #[test]
    fn test_empty_registry_renders_only_diagnostics() {
        let registry = Registry::empty();
        let config = Config::default();
        let mut cx = RenderContext::new(&registry, &CDomain, &config, SourceLocation::new("test.rst", 1));
        let doc = xml::parse("<para>text</para>").unwrap();
        match registry.dispatch(doc.root_element(), &mut cx).unwrap() {
            Rendered::Unhandled(unhandled) => {
                assert_eq!(unhandled.tag, "para");
                assert_eq!(unhandled.dump, "<para>text</para>");
            }
            other => panic!("expected an unhandled tag, got {:?}", other),
        }
        assert!(cx.diagnostics().is_empty());
        assert_eq!(cx.render(doc.root_element()).unwrap().len(), 1);
        assert_eq!(cx.diagnostics().warnings().len(), 1);
    }

    #[test]
    fn test_parameters_nested_in_a_return_render_once() {
        let source = r#"<memberdef kind="function" prot="public">
            <type>int</type><name>f</name><argsstring>(int a)</argsstring>
            <detaileddescription><para><simplesect kind="return"><para>R.</para>
            <parameterlist kind="param"><parameteritem>
            <parameternamelist><parametername>a</parametername></parameternamelist>
            <parameterdescription><para>A.</para></parameterdescription>
            </parameteritem></parameterlist>
            </simplesect></para></detaileddescription>
        </memberdef>"#;
        let nodes = render(source).unwrap();
        let function = description(&nodes[0]);
        assert_eq!(function.content.len(), 1);
        let fields = field_lists(&function.content)[0];
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, "Returns");

        let mentions = Node::FieldList(fields.to_vec()).astext().matches("A.").count();
        assert_eq!(mentions, 1);
        match &fields[0].body {
            Node::Container(children) => {
                assert_eq!(children[0], paragraph(vec![text("R.")]));
                assert_eq!(field_lists(children).len(), 1);
            }
            other => panic!("expected a container body, got {:?}", other),
        }
    }

    #[test]
    fn test_private_struct_follows_visibility_policy() {
        let source = POINT.replace(
            r#"kind="struct" language="C++" prot="public""#,
            r#"kind="struct" language="C++" prot="private""#,
        );
        match render(&source) {
            Err(Error::NonPublic { tag, kind, prot }) => {
                assert_eq!((tag.as_str(), kind.as_str(), prot.as_str()), ("compounddef", "struct", "private"));
            }
            other => panic!("expected a protection error, got {:?}", other),
        }

        let config = Config::default().with_non_public(VisibilityPolicy::Skip);
        let (nodes, warnings) = render_with(&source, config).unwrap();
        assert!(nodes.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_struct_without_protection_is_rendered() {
        let source = POINT.replace(r#" prot="public">
  <compoundname>"#, r#">
  <compoundname>"#);
        assert!(!source.contains(r#"language="C++" prot="#));
        let nodes = render(&source).unwrap();
        assert_eq!(section(&nodes[0]).title, "Struct Point");
    }

    #[test]
    fn test_compound_without_xml_root_is_a_config_error() {
        let error = render(r#"<innerclass refid="structone" prot="public">one</innerclass>"#).unwrap_err();
        assert!(matches!(error, Error::MissingConfig("doxygen_xml")));
    }
}
