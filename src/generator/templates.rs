//! Static shell fragments of the generated PlamoBuild script.
//!
//! The fragments are fixed text; the only substitution is the install
//! prefix, spliced in via the `@PREFIX@` token. Everything else the script
//! needs arrives through the header variables the generator emits.

use crate::classifier::BuildMethod;

/// Phase-flag parsing and the download phase, shared by every method.
pub const PREAMBLE: &str = r#"
source /usr/lib/setup/plamobuild_functions.sh

if [ $# -eq 0 ] ; then
  opt_download=0 ; opt_config=1 ; opt_build=1 ; opt_package=1
else
  opt_download=0 ; opt_config=0 ; opt_build=0 ; opt_package=0
  for i in $@ ; do
    case $i in
    download) opt_download=1 ;;
    config) opt_config=1 ;;
    build) opt_build=1 ;;
    package) opt_package=1 ;;
    esac
  done
fi
if [ $opt_download -eq 1 ] ; then
    download_sources
fi
"#;

const CONFIGURE_IN_TREE: &str = r#"
if [ $opt_config -eq 1 ] ; then
    if [ -d $B ] ; then rm -rf $B ; fi ; mkdir -p $B ; cp -a $S/* $B
######################################################################
#  copy sources into build directory, patch and make in the build dir
######################################################################
    cd $B
    for patch in $patchfiles ; do
       patch -p1 < $W/$patch
    done

    # if [ -f autogen.sh ] ; then
    #   sh ./autogen.sh
    # fi
    export PKG_CONFIG_PATH=/usr/${libdir}/pkgconfig:/usr/share/pkgconfig:/opt/kde/${libdir}/pkgconfig
    export LDFLAGS='-Wl,--as-needed'
    export CC="gcc -isystem /usr/include $target"
    export CXX="g++ -isystem /usr/include $target "
    ./configure --prefix=@PREFIX@ --sysconfdir=/etc --localstatedir=/var --mandir='${prefix}'/share/man ${OPT_CONFIG[$i]}
"#;

const CONFIGURE_OUT_OF_TREE: &str = r#"
if [ $opt_config -eq 1 ] ; then
    if [ -d $B ] ; then rm -rf $B ; fi ; mkdir -p $B
######################################################################
#  don't copy sources, so need patch in the src dir
######################################################################
    cd $S
    for patch in $patchfiles ; do
        if [ ! -f .${patch} ]; then
            patch -p1 < $W/$patch
            touch .${patch}
        fi
    done

    cd $B
    # if [ -f $S/autogen.sh ] ; then
    #   sh ./autogen.sh
    # fi
    export PKG_CONFIG_PATH=/usr/${libdir}/pkgconfig:/usr/share/pkgconfig:/opt/kde/${libdir}/pkgconfig
    export LDFLAGS='-Wl,--as-needed'
    export CC="gcc -isystem /usr/include $target"
    export CXX="g++ -isystem /usr/include $target "
    $S/configure --prefix=@PREFIX@ --sysconfdir=/etc --localstatedir=/var --mandir='${prefix}'/share/man ${OPT_CONFIG[$i]}
"#;

const CMAKE_CONFIG: &str = r#"
if [ $opt_config -eq 1 ] ; then
    if [ -d $B ] ; then rm -rf $B ; fi ; mkdir -p $B
######################################################################
#   patch apply to source tree but make at out of source tree
######################################################################
    cd $S
    for patch in $patchfiles ; do
        if [ ! -f .${patch} ]; then
            patch -p1 < $W/$patch
            touch .${patch}
        fi
    done
    cd $B
    export PKG_CONFIG_PATH=/usr/${libdir}/pkgconfig:/usr/share/pkgconfig:/opt/kde/${libdir}/pkgconfig
    export LDFLAGS='-Wl,--as-needed'
    export CC="gcc -isystem /usr/include $target"
    export CXX="g++ -isystem /usr/include $target "
    cmake -DCMAKE_INSTALL_PREFIX:PATH=@PREFIX@ ${OPT_CONFIG[$i]} $S
"#;

const PYTHON_CONFIG: &str = r#"
if [ $opt_config -eq 1 ] ; then
    if [ -d $B ] ; then rm -rf $B ; fi ; mkdir -p $B ; cp -a $S/* $B
######################################################################
#  copy srcs to build directory, patch and config in build dir
######################################################################
    cd $B
    for patch in $patchfiles ; do
       patch -p1 < $W/$patch
    done

    python setup.py config
"#;

const PERL_CONFIG: &str = r#"
if [ $opt_config -eq 1 ] ; then
    if [ -d $B ] ; then rm -rf $B ; fi ; mkdir -p $B ; cp -a $S/* $B
######################################################################
#  copy srcs to build directory, patch and config in build dir
######################################################################
    cd $B
    for patch in $patchfiles ; do
       patch -p1 < $W/$patch
    done

    perl Makefile.PL
"#;

const CONFIG_FOOTER: &str = r#"
    if [ $? != 0 ]; then
        echo "configure error. $0 script stop"
        exit 255
    fi
fi
"#;

const BUILD_MAKE: &str = r#"
if [ $opt_build -eq 1 ] ; then
    cd $B
    export LDFLAGS='-Wl,--as-needed'
    make -j3
    if [ $? != 0 ]; then
        echo "build error. $0 script stop"
        exit 255
    fi
fi

if [ $opt_package -eq 1 ] ; then
  if [ `id -u` -ne 0 ] ; then
    read -p "Do you want to package as root? [y/N] " ans
    if [ "x$ans" == "xY" -o "x$ans" == "xy" ] ; then
      cd $W ; /bin/su -c "$0 package" ; exit
    fi
  fi
  if [ -d $P ] ; then rm -rf $P ; fi ; mkdir -p $P
  if [ -d $C ] ; then rm -rf $C ; fi ; mkdir -p $C
  touch $W/i.st ; sleep 1
  cd $B
  export LDFLAGS='-Wl,--as-needed'
  make install DESTDIR=$P
"#;

const BUILD_PYTHON: &str = r#"
if [ $opt_build -eq 1 ] ; then
    cd $B
    python setup.py build
    if [ $? != 0 ]; then
        echo "build error. $0 script stop"
        exit 255
    fi
fi

if [ $opt_package -eq 1 ] ; then
  if [ `id -u` -ne 0 ] ; then
    read -p "Do you want to package as root? [y/N] " ans
    if [ "x$ans" == "xY" -o "x$ans" == "xy" ] ; then
      cd $W ; /bin/su -c "$0 package" ; exit
    fi
  fi
  if [ -d $P ] ; then rm -rf $P ; fi ; mkdir -p $P
  if [ -d $C ] ; then rm -rf $C ; fi ; mkdir -p $C
  touch $W/i.st ; sleep 1
  cd $B
  python setup.py install --root $P
"#;

const PACKAGE_FOOTER: &str = r#"
################################
#      install tweaks
#  strip binaries, delete locale except ja, compress man,
#  install docs and patches, compress them and  chown root.root
################################
    install_tweak

  cd $P
  /sbin/makepkg ../$pkg.$compress <<EOF
y
1
EOF

fi
"#;

/// Configure-phase fragment for a build method, with the install prefix
/// substituted in. `in_tree` selects the source-copying configure variant
/// and only applies to [`BuildMethod::Configure`].
pub fn config_section(method: BuildMethod, prefix: &str, in_tree: bool) -> String {
    let body = match method {
        BuildMethod::Configure if in_tree => CONFIGURE_IN_TREE,
        BuildMethod::Configure => CONFIGURE_OUT_OF_TREE,
        BuildMethod::CMake => CMAKE_CONFIG,
        BuildMethod::Python => PYTHON_CONFIG,
        BuildMethod::Perl => PERL_CONFIG,
    };
    format!(
        "{}{}{}",
        PREAMBLE,
        body.replace("@PREFIX@", prefix),
        CONFIG_FOOTER
    )
}

/// Build and package phases for a build method.
pub fn build_section(method: BuildMethod) -> String {
    let body = match method {
        BuildMethod::Python => BUILD_PYTHON,
        BuildMethod::Configure | BuildMethod::CMake | BuildMethod::Perl => BUILD_MAKE,
    };
    format!("{}{}", body, PACKAGE_FOOTER)
}
